//! # Promotional Banner
//!
//! A full-width banner with a headline and one call-to-action link.

use serde::{Deserialize, Serialize};
use storefront_core::validation::{validate_display_text, validate_link};

use crate::error::SectionResult;
use crate::markup::{push_attr, push_escaped, Render};

/// Promotional banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoBanner {
    /// Small line above the title ("Limited time").
    pub eyebrow: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_href: String,
    pub image_url: String,
}

impl Default for PromoBanner {
    fn default() -> Self {
        PromoBanner {
            eyebrow: Some("Limited time".to_string()),
            title: "Summer Collection".to_string(),
            subtitle: "Up to 40% off selected styles".to_string(),
            cta_label: "Shop now".to_string(),
            cta_href: "/collections/summer".to_string(),
            image_url: "/images/banner/summer.jpg".to_string(),
        }
    }
}

impl PromoBanner {
    pub fn validate(&self) -> SectionResult<()> {
        validate_display_text("banner.title", &self.title)?;
        validate_display_text("banner.cta_label", &self.cta_label)?;
        validate_link("banner.cta_href", &self.cta_href)?;
        validate_link("banner.image_url", &self.image_url)?;
        Ok(())
    }
}

impl Render for PromoBanner {
    fn render(&self, out: &mut String) {
        out.push_str("<section class=\"promo-banner\"");
        push_attr(
            out,
            "style",
            &format!("background-image: url('{}')", self.image_url),
        );
        out.push_str("><div class=\"promo-banner__content\">");

        if let Some(eyebrow) = self.eyebrow.as_deref().filter(|e| !e.is_empty()) {
            out.push_str("<p class=\"promo-banner__eyebrow\">");
            push_escaped(out, eyebrow);
            out.push_str("</p>");
        }

        out.push_str("<h2 class=\"promo-banner__title\">");
        push_escaped(out, &self.title);
        out.push_str("</h2>");

        if !self.subtitle.is_empty() {
            out.push_str("<p class=\"promo-banner__subtitle\">");
            push_escaped(out, &self.subtitle);
            out.push_str("</p>");
        }

        out.push_str("<a class=\"promo-banner__cta\"");
        push_attr(out, "href", &self.cta_href);
        out.push('>');
        push_escaped(out, &self.cta_label);
        out.push_str("</a></div></section>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_banner_is_valid() {
        assert!(PromoBanner::default().validate().is_ok());
    }

    #[test]
    fn test_render() {
        let banner = PromoBanner {
            eyebrow: None,
            title: "Bags & Backpacks".into(),
            subtitle: String::new(),
            cta_label: "Explore".into(),
            cta_href: "/collections/bags".into(),
            image_url: "/images/bags.jpg".into(),
        };

        let html = banner.to_html();
        assert!(html.starts_with("<section class=\"promo-banner\""));
        assert!(html.contains("url(&#39;/images/bags.jpg&#39;)"));
        assert!(html.contains("<h2 class=\"promo-banner__title\">Bags &amp; Backpacks</h2>"));
        assert!(html.contains("<a class=\"promo-banner__cta\" href=\"/collections/bags\">Explore</a>"));
        assert!(!html.contains("promo-banner__eyebrow"));
        assert!(!html.contains("promo-banner__subtitle"));
    }

    #[test]
    fn test_invalid_cta_rejected() {
        let banner = PromoBanner {
            cta_href: "javascript:void(0)".into(),
            ..PromoBanner::default()
        };
        assert!(banner.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn test_image_url_cannot_escape_css_url() {
        let banner = PromoBanner {
            image_url: "/images/a.jpg');background:red;('".into(),
            ..PromoBanner::default()
        };
        assert!(banner.validate().unwrap_err().is_config_error());
    }
}
