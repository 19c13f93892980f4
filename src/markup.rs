//! `<img>` tag rendering.
//!
//! Uses [maud](https://maud.lambda.xyz/) like any other HTML in the crate.
//! The `src` attribute is spliced pre-escaped: it is a [`GravatarUrl`] whose
//! only free-form part, the default image, is already percent-encoded, and
//! the `&` separators must reach the page verbatim. `alt` is caller text and
//! goes through maud's escaping.

use crate::avatar::GravatarUrl;
use maud::{Markup, PreEscaped, html};

/// `<img src=".." alt=".." height=".." width="..">`, attributes in that order.
pub fn render_img(src: &GravatarUrl, alt: &str, height: u32, width: u32) -> Markup {
    html! {
        img src=(PreEscaped(src.to_string())) alt=(alt) height=(height) width=(width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::EmailHash;
    use crate::rating::Rating;

    fn sample_url() -> GravatarUrl {
        GravatarUrl {
            hash: EmailHash::of("antoine.augusti@gmail.com"),
            size: 250,
            rating: Rating::Pg,
            default: "monsterid".to_string(),
        }
    }

    #[test]
    fn renders_void_img_with_fixed_attribute_order() {
        let html = render_img(&sample_url(), "", 250, 250).into_string();
        assert_eq!(
            html,
            r#"<img src="https://secure.gravatar.com/avatar/91b3b0391936c88c2d8a51754d8d3935?s=250&r=pg&d=monsterid" alt="" height="250" width="250">"#
        );
    }

    #[test]
    fn alt_text_is_escaped() {
        let html = render_img(&sample_url(), r#"<b>"me" & you</b>"#, 10, 10).into_string();
        assert!(html.contains(r#"alt="&lt;b&gt;&quot;me&quot; &amp; you&lt;/b&gt;""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn query_separators_are_not_escaped() {
        let html = render_img(&sample_url(), "", 1, 1).into_string();
        assert!(html.contains("?s=250&r=pg&d=monsterid"));
        assert!(!html.contains("&amp;r="));
    }
}
