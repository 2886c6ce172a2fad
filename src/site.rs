use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use rust_embed::Embed;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

/// Services that get a link in the hero. Matched exactly, case included.
pub const ALLOWED_SERVICES: [&str; 4] = ["GitHub", "Twitter", "FaceBook", "Hatena"];

pub const DATA_PATH: &str = "data.json";
pub const AVATAR_PATH: &str = "avatar.svg";
pub const STATIC_PREFIX: &str = "/static";

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[cfg(feature = "ssr")]
static SITE_DATA: LazyLock<SiteData> = LazyLock::new(load_site_data);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarDescriptor {
    pub src: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub service: Option<String>,
    pub url: Option<String>,
    pub color: Option<String>,
}

/// The `sns` list as written in `data.json`. `null` entries are kept and skipped later.
pub type Accounts = Option<Vec<Option<SocialAccount>>>;

/// A social account that passed the rendering gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub color: String,
}

/// Everything the hero needs, resolved before the first paint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    pub avatar: Option<AvatarDescriptor>,
    pub sns: Accounts,
}

impl SiteData {
    pub fn avatar_src(&self) -> Option<&str> {
        self.avatar
            .as_ref()?
            .src
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    pub fn social_links(&self) -> Vec<SocialLink> {
        social_links(self.sns.as_deref(), &ALLOWED_SERVICES)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Site content not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse site data: {0}")]
    Parse(String),
}

/// Keeps the accounts whose service is in `allowed`, in input order.
/// `null` entries and entries without a service never match.
pub fn filter_allowed<'a>(
    accounts: Option<&'a [Option<SocialAccount>]>,
    allowed: &[&str],
) -> Vec<&'a SocialAccount> {
    accounts
        .unwrap_or_default()
        .iter()
        .flatten()
        .filter(|account| {
            account
                .service
                .as_deref()
                .is_some_and(|service| allowed.contains(&service))
        })
        .collect()
}

/// Accounts without both a url and a color are not linkable.
pub fn social_link(account: &SocialAccount) -> Option<SocialLink> {
    let label = account.service.as_deref()?;
    let url = account.url.as_deref().filter(|s| !s.is_empty())?;
    let color = account.color.as_deref().filter(|s| !s.is_empty())?;
    Some(SocialLink {
        label: label.to_string(),
        url: url.to_string(),
        color: color.to_string(),
    })
}

pub fn social_links(accounts: Option<&[Option<SocialAccount>]>, allowed: &[&str]) -> Vec<SocialLink> {
    filter_allowed(accounts, allowed)
        .into_iter()
        .filter_map(social_link)
        .collect()
}

/// `avatar.svg` + hash -> `avatar-1a2b3c4d.svg`, using the first four bytes of the hash.
pub fn fingerprinted_name(path: &str, hash: &[u8]) -> String {
    let digest = hash
        .iter()
        .take(4)
        .map(|b| format!("{b:02x}"))
        .collect::<String>();
    match path.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{digest}.{ext}"),
        _ => format!("{path}-{digest}"),
    }
}

#[derive(Deserialize, Debug, Default)]
struct DataFile {
    sns: Accounts,
}

pub fn parse_accounts(bytes: &[u8]) -> Result<Accounts, SiteError> {
    serde_json::from_slice::<DataFile>(bytes)
        .map(|data| data.sns)
        .map_err(|e| SiteError::Parse(e.to_string()))
}

/// Cached once per process.
#[cfg(feature = "ssr")]
pub fn site_data() -> SiteData {
    SITE_DATA.clone()
}

#[cfg(feature = "ssr")]
pub fn load_site_data() -> SiteData {
    site_data_from(resolve_image(AVATAR_PATH), load_accounts())
}

#[cfg(feature = "ssr")]
pub fn load_accounts() -> Result<Accounts, SiteError> {
    let file = Content::get(DATA_PATH).ok_or_else(|| SiteError::NotFound(DATA_PATH.to_string()))?;
    parse_accounts(&file.data)
}

/// The avatar and the account list are independent; losing one keeps the other.
#[cfg(feature = "ssr")]
pub fn site_data_from(
    avatar: Option<AvatarDescriptor>,
    accounts: Result<Accounts, SiteError>,
) -> SiteData {
    if avatar.is_none() {
        tracing::warn!(path = AVATAR_PATH, "avatar image not found");
    }
    let sns = accounts.unwrap_or_else(|e| {
        tracing::error!(error = %e, "social accounts unavailable");
        None
    });
    tracing::info!(
        accounts = sns.as_ref().map_or(0, Vec::len),
        avatar = avatar.is_some(),
        "loaded site data"
    );
    SiteData { avatar, sns }
}

#[cfg(feature = "ssr")]
pub fn resolve_image(path: &str) -> Option<AvatarDescriptor> {
    let file = Content::get(path)?;
    let name = fingerprinted_name(path, &file.metadata.sha256_hash());
    Some(AvatarDescriptor {
        src: Some(format!("{STATIC_PREFIX}/{name}")),
    })
}
