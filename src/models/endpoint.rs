use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The publisher API endpoints this client knows how to tabulate.
///
/// The allow-list itself stays a list of raw strings so the caller can extend
/// it past this set; an allow-listed name that does not parse to a variant is
/// rendered as a preformatted dump instead of a table.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
pub enum Endpoint {
    #[strum(serialize = "campaigns/feeds")]
    CampaignFeeds,
    #[strum(serialize = "campaigns/active")]
    CampaignActive,
    #[strum(serialize = "account/apikeys")]
    AccountApiKeys,
    #[strum(serialize = "account/medias")]
    AccountMedias,
}

impl Endpoint {
    pub fn default_allow_list() -> Vec<String> {
        Self::iter().map(|endpoint| endpoint.to_string()).collect()
    }
}
