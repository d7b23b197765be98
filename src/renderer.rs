//! HTML tag rendering for resolved asset paths.
//!
//! The helper never builds markup itself; it hands resolved paths to a
//! [`TagRenderer`]. Embedding applications can plug in their templating
//! framework's own tag builder, while [`HtmlTagRenderer`] covers the
//! common case of returning plain HTML strings.

/// Options applied when rendering `<link>` tags.
///
/// Unset fields are filled from call-site defaults via [`merged_over`];
/// fields set by the caller always win.
///
/// [`merged_over`]: LinkOptions::merged_over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Whether the tag should be returned in place rather than collected
    /// into a layout block. Only meaningful to renderers that support
    /// block collection; [`HtmlTagRenderer`] always returns markup.
    pub inline: Option<bool>,
}

impl LinkOptions {
    /// Fill unset fields from `fallback`, keeping caller-set fields.
    pub fn merged_over(self, fallback: &LinkOptions) -> Self {
        Self {
            inline: self.inline.or(fallback.inline),
        }
    }
}

/// Options applied when rendering `<script>` tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Whether the script should carry the `defer` attribute.
    pub defer: Option<bool>,
    /// Same placement hint as [`LinkOptions::inline`].
    pub inline: Option<bool>,
}

impl ScriptOptions {
    /// Fill unset fields from `fallback`, keeping caller-set fields.
    pub fn merged_over(self, fallback: &ScriptOptions) -> Self {
        Self {
            defer: self.defer.or(fallback.defer),
            inline: self.inline.or(fallback.inline),
        }
    }
}

/// Capability for turning resolved asset paths into markup.
pub trait TagRenderer {
    /// Render `<link>` tags for the given stylesheet paths, optionally
    /// scoped to a media query.
    fn css(&self, paths: &[String], media: Option<&str>, options: &LinkOptions) -> String;

    /// Render `<script>` tags for the given script paths.
    fn script(&self, paths: &[String], options: &ScriptOptions) -> String;

    /// Render an `<img>` tag with the given extra attributes.
    fn image(&self, path: &str, attrs: &[(&str, &str)]) -> String;
}

/// Plain-HTML [`TagRenderer`] producing one tag per path, newline-joined.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTagRenderer;

impl TagRenderer for HtmlTagRenderer {
    fn css(&self, paths: &[String], media: Option<&str>, _options: &LinkOptions) -> String {
        let tags: Vec<String> = paths
            .iter()
            .map(|path| match media {
                Some(media) => format!(
                    r#"<link rel="stylesheet" href="{}" media="{}">"#,
                    escape_attr(path),
                    escape_attr(media)
                ),
                None => format!(r#"<link rel="stylesheet" href="{}">"#, escape_attr(path)),
            })
            .collect();
        tags.join("\n")
    }

    fn script(&self, paths: &[String], options: &ScriptOptions) -> String {
        let defer = if options.defer.unwrap_or(false) {
            " defer"
        } else {
            ""
        };
        let tags: Vec<String> = paths
            .iter()
            .map(|path| format!(r#"<script src="{}"{}></script>"#, escape_attr(path), defer))
            .collect();
        tags.join("\n")
    }

    fn image(&self, path: &str, attrs: &[(&str, &str)]) -> String {
        let mut tag = format!(r#"<img src="{}""#, escape_attr(path));
        for (name, value) in attrs {
            tag.push_str(&format!(r#" {}="{}""#, name, escape_attr(value)));
        }
        // alt is always present; a caller-supplied alt wins
        if !attrs.iter().any(|(name, _)| *name == "alt") {
            tag.push_str(r#" alt="""#);
        }
        tag.push('>');
        tag
    }
}

/// Escape a string for use inside a double-quoted HTML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn renders_one_link_tag_per_stylesheet() {
        let markup = HtmlTagRenderer.css(
            &paths(&["/build/a.css", "/build/b.css"]),
            None,
            &LinkOptions::default(),
        );

        assert_eq!(
            markup,
            "<link rel=\"stylesheet\" href=\"/build/a.css\">\n\
             <link rel=\"stylesheet\" href=\"/build/b.css\">"
        );
    }

    #[test]
    fn renders_media_scoped_links() {
        let markup = HtmlTagRenderer.css(
            &paths(&["/build/print.css"]),
            Some("print"),
            &LinkOptions::default(),
        );

        assert_eq!(
            markup,
            r#"<link rel="stylesheet" href="/build/print.css" media="print">"#
        );
    }

    #[test]
    fn renders_deferred_scripts_only_when_asked() {
        let deferred = HtmlTagRenderer.script(
            &paths(&["/build/app.js"]),
            &ScriptOptions {
                defer: Some(true),
                inline: None,
            },
        );
        let plain = HtmlTagRenderer.script(&paths(&["/build/app.js"]), &ScriptOptions::default());

        assert_eq!(deferred, r#"<script src="/build/app.js" defer></script>"#);
        assert_eq!(plain, r#"<script src="/build/app.js"></script>"#);
    }

    #[test]
    fn renders_images_with_attributes_and_a_default_alt() {
        let with_attrs = HtmlTagRenderer.image(
            "/build/logo.abc.png",
            &[("class", "logo"), ("alt", "Site logo")],
        );
        let bare = HtmlTagRenderer.image("/build/logo.abc.png", &[]);

        assert_eq!(
            with_attrs,
            r#"<img src="/build/logo.abc.png" class="logo" alt="Site logo">"#
        );
        assert_eq!(bare, r#"<img src="/build/logo.abc.png" alt="">"#);
    }

    #[test]
    fn escapes_attribute_values() {
        let markup = HtmlTagRenderer.image("/build/a\"b.png", &[("title", "x < y & z")]);

        assert_eq!(
            markup,
            r#"<img src="/build/a&quot;b.png" title="x &lt; y &amp; z" alt="">"#
        );
    }

    #[test]
    fn empty_path_lists_render_to_nothing() {
        assert_eq!(
            HtmlTagRenderer.css(&[], None, &LinkOptions::default()),
            ""
        );
        assert_eq!(HtmlTagRenderer.script(&[], &ScriptOptions::default()), "");
    }

    #[test]
    fn merge_keeps_caller_fields_and_fills_the_rest() {
        let defaults = ScriptOptions {
            defer: Some(true),
            inline: Some(false),
        };
        let overridden = ScriptOptions {
            defer: Some(false),
            inline: None,
        }
        .merged_over(&defaults);
        let untouched = ScriptOptions::default().merged_over(&defaults);

        assert_eq!(overridden.defer, Some(false));
        assert_eq!(overridden.inline, Some(false));
        assert_eq!(untouched.defer, Some(true));
        assert_eq!(untouched.inline, Some(false));
    }
}
