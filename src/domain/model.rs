use serde::{Deserialize, Serialize};

use crate::domain::multi_string::MultiString;
use crate::utils::error::{Result, RtbError};
use crate::utils::validation::Validate;

/// Vendor-specific data carried under `ext`. Opaque to this crate; owned by
/// the record that holds it.
pub type Extension = serde_json::Value;

/// One bid for one impression, as carried inside a bid response.
///
/// `id`, `impid` and `price` are required; every other field is omitted from
/// the wire when empty. If the bidder wins the impression, the exchange calls
/// the win notice URL (`nurl`), which may carry substitution macros so a
/// bidder can reuse one static URL across bids. `adomain` supports advertiser
/// block-list checks, and `cid` can be used to block campaigns previously
/// flagged as inappropriate.
///
/// All fields decode with their zero value when absent, so a payload missing
/// required fields still parses and is caught by [`Validate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    #[serde(default)]
    pub id: String,

    /// ID of the impression object this bid applies to.
    #[serde(rename = "impid", default)]
    pub imp_id: String,

    /// Bid price in CPM. Downstream accounting should use integer math to
    /// avoid cumulative rounding error; no rounding happens here.
    #[serde(default)]
    pub price: f64,

    /// References the ad to be served if the bid wins.
    #[serde(rename = "adid", default, skip_serializing_if = "String::is_empty")]
    pub ad_id: String,

    /// Win notice URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nurl: String,

    /// Actual ad markup: XHTML for a banner response, VAST XML for video.
    #[serde(rename = "adm", default, skip_serializing_if = "String::is_empty")]
    pub ad_markup: String,

    /// Advertiser's primary or top-level domain(s); more than one when the
    /// creative rotates.
    #[serde(
        rename = "adomain",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub adv_domain: Vec<String>,

    /// Platform-specific application identifier, unique to the app and
    /// independent of the exchange.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bundle: String,

    /// Sample image URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iurl: String,

    /// Campaign ID that appears with the ad markup. Some exchanges send this
    /// unquoted, hence [`MultiString`].
    #[serde(
        rename = "cid",
        default,
        skip_serializing_if = "MultiString::is_empty"
    )]
    pub campaign_id: MultiString,

    /// Creative ID, for reporting content issues or referencing a creative
    /// posted with an exchange.
    #[serde(rename = "crid", default, skip_serializing_if = "String::is_empty")]
    pub creative_id: String,

    /// IAB content categories of the creative.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cat: Vec<String>,

    /// Creative attribute codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attr: Vec<i32>,

    /// API required by the markup, if applicable.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub api: i32,

    /// Video response protocol of the markup, if applicable.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub protocol: i32,

    /// Creative media rating per IQG guidelines.
    #[serde(
        rename = "qagmediarating",
        default,
        skip_serializing_if = "is_zero"
    )]
    pub qag_media_rating: i32,

    /// Private marketplace deal ID.
    #[serde(rename = "dealid", default, skip_serializing_if = "String::is_empty")]
    pub deal_id: String,

    /// Ad height in pixels.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub h: i32,

    /// Ad width in pixels.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub w: i32,

    /// Advisory number of seconds the bidder will wait between auction and
    /// actual impression.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub exp: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,
}

impl Bid {
    /// Decodes one bid entry from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encodes the bid to its JSON wire form, omitting empty optional fields.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Validate for Bid {
    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(RtbError::MissingBidId);
        }
        if self.imp_id.is_empty() {
            return Err(RtbError::MissingImpressionId);
        }
        Ok(())
    }
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}
