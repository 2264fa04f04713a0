//! # Instagram Gallery
//!
//! A teaser grid of recent Instagram posts linking out to the profile.

use serde::{Deserialize, Serialize};
use storefront_core::validation::{validate_display_text, validate_link};

use crate::error::{SectionError, SectionResult};
use crate::markup::{push_attr, push_escaped, Render};

/// Most posts the grid shows; extra configured posts are ignored.
pub const MAX_GALLERY_POSTS: usize = 12;

/// One thumbnail in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPost {
    pub image_url: String,
    #[serde(default)]
    pub alt: String,
    pub permalink: String,
}

/// Instagram gallery teaser content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstagramGallery {
    /// Account handle without the leading `@`.
    pub handle: String,
    pub profile_url: String,
    pub heading: String,
    pub posts: Vec<GalleryPost>,
}

impl Default for InstagramGallery {
    fn default() -> Self {
        let profile_url = "https://www.instagram.com/storefront".to_string();
        let posts = (1..=6)
            .map(|n| GalleryPost {
                image_url: format!("/images/instagram/post-{n}.jpg"),
                alt: format!("Instagram post {n}"),
                permalink: profile_url.clone(),
            })
            .collect();

        InstagramGallery {
            handle: "storefront".to_string(),
            profile_url,
            heading: "Follow us on Instagram".to_string(),
            posts,
        }
    }
}

impl InstagramGallery {
    pub fn validate(&self) -> SectionResult<()> {
        if self.handle.trim().is_empty() || self.handle.starts_with('@') {
            return Err(SectionError::InvalidConfig(
                "gallery.handle must be set, without a leading '@'".into(),
            ));
        }
        validate_link("gallery.profile_url", &self.profile_url)?;
        validate_display_text("gallery.heading", &self.heading)?;

        for post in &self.posts {
            validate_link("gallery.posts.image_url", &post.image_url)?;
            validate_link("gallery.posts.permalink", &post.permalink)?;
        }
        Ok(())
    }

    /// Posts that will be shown, in configured order.
    pub fn visible_posts(&self) -> &[GalleryPost] {
        &self.posts[..self.posts.len().min(MAX_GALLERY_POSTS)]
    }
}

impl Render for InstagramGallery {
    fn render(&self, out: &mut String) {
        out.push_str("<section class=\"instagram-gallery\"><h2 class=\"instagram-gallery__heading\">");
        push_escaped(out, &self.heading);
        out.push_str("</h2><a class=\"instagram-gallery__profile\"");
        push_attr(out, "href", &self.profile_url);
        out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\">@");
        push_escaped(out, &self.handle);
        out.push_str("</a><ul class=\"instagram-gallery__grid\">");

        for post in self.visible_posts() {
            out.push_str("<li><a");
            push_attr(out, "href", &post.permalink);
            out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"><img");
            push_attr(out, "src", &post.image_url);
            push_attr(out, "alt", &post.alt);
            out.push_str(" loading=\"lazy\"></a></li>");
        }

        out.push_str("</ul></section>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gallery_is_valid() {
        let gallery = InstagramGallery::default();
        assert!(gallery.validate().is_ok());
        assert_eq!(gallery.visible_posts().len(), 6);
    }

    #[test]
    fn test_render_keeps_post_order() {
        let gallery = InstagramGallery::default();
        let html = gallery.to_html();

        assert!(html.contains(">@storefront</a>"));
        let first = html.find("post-1.jpg").unwrap();
        let last = html.find("post-6.jpg").unwrap();
        assert!(first < last);
        assert_eq!(html.matches("<li>").count(), 6);
    }

    #[test]
    fn test_post_limit() {
        let mut gallery = InstagramGallery::default();
        let post = gallery.posts[0].clone();
        gallery.posts = vec![post; 20];

        assert_eq!(gallery.visible_posts().len(), MAX_GALLERY_POSTS);
        assert_eq!(gallery.to_html().matches("<li>").count(), MAX_GALLERY_POSTS);
    }

    #[test]
    fn test_alt_text_escaped() {
        let mut gallery = InstagramGallery::default();
        gallery.posts.truncate(1);
        gallery.posts[0].alt = "\"Sunset\" <3".into();
        assert!(gallery.to_html().contains("alt=\"&quot;Sunset&quot; &lt;3\""));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let gallery: InstagramGallery = toml::from_str("handle = \"shop.daily\"").unwrap();
        let defaults = InstagramGallery::default();

        assert_eq!(gallery.handle, "shop.daily");
        assert_eq!(gallery.profile_url, defaults.profile_url);
        assert_eq!(gallery.posts, defaults.posts);
    }

    #[test]
    fn test_handle_with_at_rejected() {
        let gallery = InstagramGallery {
            handle: "@storefront".into(),
            ..InstagramGallery::default()
        };
        assert!(matches!(
            gallery.validate(),
            Err(SectionError::InvalidConfig(_))
        ));
    }
}
