// ============================================================================
// ENDPOINTS - Logical operation name -> path template
// ============================================================================
// Pure data. Parameterised paths interpolate the identifier as-is: no
// escaping, no validation.
// ============================================================================

use std::fmt::Display;

pub mod user {
    use super::*;

    pub const LIST: &str = "/api/register/";

    pub fn item(id: impl Display) -> String {
        format!("/api/register/{}/", id)
    }
}

pub mod membership {
    use super::*;

    pub const LIST: &str = "/api/subscription/list/";
    pub const CREATE: &str = "/api/subscription/create/";

    pub fn by_id(id: impl Display) -> String {
        format!("/api/subscription/list/{}/", id)
    }

    /// Update and delete share this path
    pub fn item(id: impl Display) -> String {
        format!("/api/subscription/{}/", id)
    }
}

pub mod resort {
    use super::*;

    pub const LIST: &str = "/api/resorts/";
    pub const CREATE: &str = "/api/resorts/";

    pub fn item(id: impl Display) -> String {
        format!("/api/resorts/{}/", id)
    }
}

pub mod place {
    pub const CREATE: &str = "/api/place/";
}

pub mod resort_form_data {
    use super::*;

    pub const LIST: &str = "/api/form-data/";
    pub const CREATE: &str = "/api/form-data/";

    pub fn item(id: impl Display) -> String {
        format!("/api/form-data/{}/", id)
    }

    pub fn upload_images(id: impl Display) -> String {
        format!("/api/form-data/{}/upload-multiple-images/", id)
    }
}

pub mod welcome {
    use super::*;

    pub const LIST: &str = "/api/welcome/";
    pub const CREATE: &str = "/api/welcome/";

    pub fn item(id: impl Display) -> String {
        format!("/api/welcome/{}/", id)
    }
}

pub mod why_choose {
    use super::*;

    pub const LIST: &str = "/api/whychoose/";
    pub const CREATE: &str = "/api/whychoose/";

    pub fn item(id: impl Display) -> String {
        format!("/api/whychoose/{}/", id)
    }
}

pub mod referral {
    use super::*;

    pub const ALL: &str = "/api/referrals/all/";
    pub const POINTS: &str = "/api/points/";

    pub fn for_user(user_uuid: impl Display) -> String {
        format!("/api/referrals/?user_uuid={}", user_uuid)
    }

    pub fn point_history(id: impl Display) -> String {
        format!("/api/points/{}/", id)
    }
}

pub mod reservation {
    pub const LIST: &str = "/api/forms/";
}

pub mod resort_feature {
    use super::*;

    pub const LIST: &str = "/api/features/";

    pub fn item(id: impl Display) -> String {
        format!("/api/features/{}/", id)
    }
}

pub mod resort_property {
    use super::*;

    pub const LIST: &str = "/api/properties/";

    pub fn item(id: impl Display) -> String {
        format!("/api/properties/{}/", id)
    }
}

pub mod blog {
    use super::*;

    pub const LIST: &str = "/api/blogs/";
    pub const CATEGORIES: &str = "/api/blog-categories/";
    pub const HEADINGS: &str = "/api/blog-headers/";
    pub const INNER: &str = "/api/blog-inner/";

    pub fn item(id: impl Display) -> String {
        format!("/api/blogs/{}/", id)
    }

    pub fn category(id: impl Display) -> String {
        format!("/api/blog-categories/{}/", id)
    }

    pub fn heading(id: impl Display) -> String {
        format!("/api/blog-headers/{}/", id)
    }

    pub fn inner(id: impl Display) -> String {
        format!("/api/blog-inner/{}/", id)
    }
}

pub mod study_abroad {
    use super::*;

    pub const COUNTRIES: &str = "/api/countries/";
    pub const UNIVERSITIES: &str = "/api/universities/";
    pub const REASONS: &str = "/api/why-choose-reasons/";

    pub fn country(id: impl Display) -> String {
        format!("/api/countries/{}/", id)
    }

    pub fn university(id: impl Display) -> String {
        format!("/api/universities/{}/", id)
    }

    pub fn reason(id: impl Display) -> String {
        format!("/api/why-choose-reasons/{}/", id)
    }
}

pub mod service {
    use super::*;

    pub const HEADINGS: &str = "/api/service-headings/";
    pub const DETAILS: &str = "/api/service-details/";

    pub fn heading(id: impl Display) -> String {
        format!("/api/service-headings/{}/", id)
    }

    pub fn detail(id: impl Display) -> String {
        format!("/api/service-details/{}/", id)
    }
}

pub mod seo {
    pub const HOME: &str = "/api/seo/home/";
    pub const CONTACT: &str = "/api/seo/contact/";
}

pub mod review {
    use super::*;

    pub const LIST: &str = "/api/reviews/";
    pub const SUCCESS_VIDEOS: &str = "/api/success-videos/";

    pub fn item(id: impl Display) -> String {
        format!("/api/reviews/{}/", id)
    }

    pub fn success_video(id: impl Display) -> String {
        format!("/api/success-videos/{}/", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterised_paths_interpolate_the_identifier() {
        assert_eq!(resort::item(42), "/api/resorts/42/");
        assert_eq!(resort_form_data::upload_images(7), "/api/form-data/7/upload-multiple-images/");
        assert_eq!(why_choose::item("abc"), "/api/whychoose/abc/");
        assert_eq!(membership::item("gold-1"), "/api/subscription/gold-1/");
        assert_eq!(referral::for_user("u-1"), "/api/referrals/?user_uuid=u-1");
    }

    #[test]
    fn identifiers_are_not_escaped() {
        // No validation happens here; the server gets exactly what was passed
        assert_eq!(blog::inner("a/b c"), "/api/blog-inner/a/b c/");
    }
}
