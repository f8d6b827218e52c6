//! Job offer entity and listing criteria.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::offer::{Location, Offer, OfferBase, OfferKind};
use super::validation::unique_values;

/// Defines a wire enum together with its stored string form.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!("unknown {} value: {}", stringify!($name), other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Where the work is performed
    JobMode {
        OnSite => "ON_SITE",
        Remote => "REMOTE",
        Hybrid => "HYBRID",
    }
}

string_enum! {
    /// Employment form
    JobType {
        Temporary => "TEMPORARY",
        Permanent => "PERMANENT",
        Seasonal => "SEASONAL",
    }
}

string_enum! {
    /// Language spoken at work
    Language {
        Pl => "PL",
        Ua => "UA",
        En => "EN",
        Ru => "RU",
    }
}

/// Job offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobOffer {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: OfferBase,
    pub mode: JobMode,
    #[validate(nested)]
    pub location: Location,
    #[serde(rename = "type")]
    #[validate(
        length(min = 1, message = "At least one job type is required"),
        custom(function = "unique_values", message = "Job types must not repeat")
    )]
    pub types: Vec<JobType>,
    #[serde(rename = "language")]
    #[validate(
        length(min = 1, message = "At least one language is required"),
        custom(function = "unique_values", message = "Languages must not repeat")
    )]
    pub languages: Vec<Language>,
}

impl Offer for JobOffer {
    type Filter = JobOfferFilter;

    const KIND: OfferKind = OfferKind::Jobs;

    fn base(&self) -> &OfferBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OfferBase {
        &mut self.base
    }
}

/// Query parameters narrowing the job offer list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct JobOfferFilter {
    /// Work mode
    pub mode: Option<JobMode>,
    /// Exact region name
    pub region: Option<String>,
    /// Exact city name
    pub city: Option<String>,
    /// Text searched in title and description
    pub phrase: Option<String>,
}
