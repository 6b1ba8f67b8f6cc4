//! Social link list and ordering logic
//!
//! A profile carries one entry per known social network. Enabled entries have
//! a dense 0-based rank (`id`) that determines the display order on the
//! public page; disabled entries carry `id = 0` and no rank. The whole list
//! is persisted as a single JSON string on the user record, so encoding and
//! decoding live here and nowhere else.
//!
//! # Invariants
//!
//! - Among enabled entries the `id` values are exactly `0..k` with no gaps
//!   or duplicates.
//! - An entry may only be enabled while its URL is a well-formed absolute URL.
//! - `name` is the stable identity of an entry; `id` is recomputed whenever
//!   the enabled set changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Networks a profile can link to. Decoded entries outside this catalog are
/// dropped; catalog entries missing from a decoded list are synthesized
/// disabled with an empty URL.
pub const SOCIAL_CATALOG: &[&str] = &[
    "facebook",
    "github",
    "instagram",
    "x",
    "youtube",
    "tiktok",
    "twitch",
    "linkedin",
];

/// One outbound link on a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Network key (stable identity, unique within the list)
    pub name: String,
    /// Destination URL
    pub url: String,
    /// Whether the link appears on the public profile
    pub enabled: bool,
    /// Dense 0-based rank among enabled entries; 0 when disabled
    pub id: u32,
}

/// Errors from link list operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The named network is not in the list
    #[error("Unknown social network: {0}")]
    UnknownNetwork(String),

    /// Enabling was rejected because the URL is not a valid absolute URL
    #[error("The URL for {0} is not valid")]
    InvalidUrl(String),

    /// A reorder rank was outside the enabled subset
    #[error("Rank {0} is out of range")]
    RankOutOfRange(usize),

    /// The encoded link list could not be parsed
    #[error("Malformed link list: {0}")]
    Malformed(String),
}

/// Check that a string is a well-formed absolute URL.
///
/// Accepts `http` and `https` URLs with a host. This is the gate for
/// enabling a link; it is not re-applied to URLs of already-enabled
/// entries.
pub fn is_absolute_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Ordered social link list for one profile
///
/// Owns the flat list of entries (enabled and disabled) and enforces the
/// rank invariants across toggling and reordering. Serialization produces the
/// exact string persisted on the user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBoard {
    links: Vec<SocialLink>,
}

impl LinkBoard {
    /// Create a board with every catalog network disabled
    pub fn from_catalog() -> Self {
        let links = SOCIAL_CATALOG
            .iter()
            .map(|name| SocialLink {
                name: (*name).to_string(),
                url: String::new(),
                enabled: false,
                id: 0,
            })
            .collect();
        Self { links }
    }

    /// Decode a persisted link list
    ///
    /// Entries not in [`SOCIAL_CATALOG`] are dropped. Catalog networks absent
    /// from the input are synthesized with `enabled = false, id = 0` and an
    /// empty URL, so the result always has one entry per catalog network, in
    /// catalog order.
    pub fn deserialize(encoded: &str) -> Result<Self, LinkError> {
        let decoded: Vec<SocialLink> =
            serde_json::from_str(encoded).map_err(|e| LinkError::Malformed(e.to_string()))?;

        let links = SOCIAL_CATALOG
            .iter()
            .map(|name| {
                decoded
                    .iter()
                    .find(|link| link.name == *name)
                    .cloned()
                    .unwrap_or_else(|| SocialLink {
                        name: (*name).to_string(),
                        url: String::new(),
                        enabled: false,
                        id: 0,
                    })
            })
            .collect();

        Ok(Self { links })
    }

    /// Encode the full list (enabled and disabled) as JSON text
    pub fn serialize(&self) -> String {
        // Vec<SocialLink> has no map keys or non-string edge cases, so
        // encoding cannot fail.
        serde_json::to_string(&self.links).unwrap_or_else(|_| "[]".to_string())
    }

    /// All entries, in storage order
    pub fn links(&self) -> &[SocialLink] {
        &self.links
    }

    /// Enabled entries sorted ascending by rank. This is the public display
    /// order.
    pub fn enabled_links(&self) -> Vec<&SocialLink> {
        let mut enabled: Vec<&SocialLink> =
            self.links.iter().filter(|link| link.enabled).collect();
        enabled.sort_by_key(|link| link.id);
        enabled
    }

    /// Update the URL of one entry. Does not touch `enabled` or `id`, and
    /// does not re-validate entries that are already enabled.
    pub fn set_url(&mut self, name: &str, url: &str) -> Result<(), LinkError> {
        let link = self
            .links
            .iter_mut()
            .find(|link| link.name == name)
            .ok_or_else(|| LinkError::UnknownNetwork(name.to_string()))?;
        link.url = url.to_string();
        Ok(())
    }

    /// Flip the enabled flag of one entry.
    ///
    /// Disabling resets the entry's rank to 0 and closes the gap by
    /// decrementing every enabled rank above it. Enabling requires a valid
    /// absolute URL and appends the entry at the highest rank.
    pub fn toggle(&mut self, name: &str) -> Result<(), LinkError> {
        let index = self
            .links
            .iter()
            .position(|link| link.name == name)
            .ok_or_else(|| LinkError::UnknownNetwork(name.to_string()))?;

        if self.links[index].enabled {
            let removed_rank = self.links[index].id;
            self.links[index].enabled = false;
            self.links[index].id = 0;
            for link in &mut self.links {
                if link.enabled && link.id > removed_rank {
                    link.id -= 1;
                }
            }
        } else {
            if !is_absolute_url(&self.links[index].url) {
                return Err(LinkError::InvalidUrl(name.to_string()));
            }
            let next_rank = self.links.iter().filter(|link| link.enabled).count() as u32;
            self.links[index].enabled = true;
            self.links[index].id = next_rank;
        }

        Ok(())
    }

    /// Move the enabled entry at rank `from` to rank `to`.
    ///
    /// Operates on the enabled subset only: the entry is removed from its
    /// position in the rank sequence, reinserted at the target position, and
    /// every enabled entry is renumbered to its new index. Disabled entries
    /// are untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), LinkError> {
        let mut order: Vec<usize> = (0..self.links.len())
            .filter(|&i| self.links[i].enabled)
            .collect();
        order.sort_by_key(|&i| self.links[i].id);

        if from >= order.len() {
            return Err(LinkError::RankOutOfRange(from));
        }
        if to >= order.len() {
            return Err(LinkError::RankOutOfRange(to));
        }

        let moved = order.remove(from);
        order.insert(to, moved);

        for (rank, &i) in order.iter().enumerate() {
            self.links[i].id = rank as u32;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn board_with(entries: &[(&str, &str, bool, u32)]) -> LinkBoard {
        let mut board = LinkBoard::from_catalog();
        for (name, url, enabled, id) in entries {
            let link = board
                .links
                .iter_mut()
                .find(|l| l.name == *name)
                .expect("catalog network");
            link.url = url.to_string();
            link.enabled = *enabled;
            link.id = *id;
        }
        board
    }

    fn enabled_names(board: &LinkBoard) -> Vec<&str> {
        board
            .enabled_links()
            .iter()
            .map(|l| l.name.as_str())
            .collect()
    }

    /// The enabled ranks must be exactly 0..k with no gaps or duplicates.
    fn assert_dense_ranks(board: &LinkBoard) {
        let mut ranks: Vec<u32> = board
            .links()
            .iter()
            .filter(|l| l.enabled)
            .map(|l| l.id)
            .collect();
        ranks.sort_unstable();
        let expected: Vec<u32> = (0..ranks.len() as u32).collect();
        assert_eq!(ranks, expected);
    }

    #[test]
    fn test_catalog_board_starts_disabled() {
        let board = LinkBoard::from_catalog();
        assert_eq!(board.links().len(), SOCIAL_CATALOG.len());
        assert!(board.links().iter().all(|l| !l.enabled && l.id == 0));
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://github.com/octocat"));
        assert!(is_absolute_url("http://example.com"));
        assert!(!is_absolute_url(""));
        assert!(!is_absolute_url("github.com/octocat"));
        assert!(!is_absolute_url("ftp://example.com"));
        assert!(!is_absolute_url("https://"));
        assert!(!is_absolute_url("https:// example.com"));
    }

    #[test]
    fn test_is_absolute_url_rejects_host_less_inputs() {
        assert!(!is_absolute_url("http://?"));
        assert!(!is_absolute_url("https://#frag"));
        assert!(!is_absolute_url("javascript:alert(1)"));
    }

    #[test]
    fn test_toggle_on_rejects_host_less_url() {
        let mut board = LinkBoard::from_catalog();
        board.set_url("github", "http://?").unwrap();

        assert_eq!(
            board.toggle("github"),
            Err(LinkError::InvalidUrl("github".to_string()))
        );
        let github = board.links().iter().find(|l| l.name == "github").unwrap();
        assert!(!github.enabled);
    }

    #[test]
    fn test_toggle_on_requires_valid_url() {
        let mut board = LinkBoard::from_catalog();
        let before = board.clone();

        let result = board.toggle("github");
        assert_eq!(result, Err(LinkError::InvalidUrl("github".to_string())));
        // Rejected toggles must not mutate anything
        assert_eq!(board, before);
    }

    #[test]
    fn test_toggle_on_appends_at_highest_rank() {
        let mut board = LinkBoard::from_catalog();
        board.set_url("x", "https://x.com/a").unwrap();
        board.set_url("facebook", "https://facebook.com/a").unwrap();
        board.toggle("x").unwrap();
        board.toggle("facebook").unwrap();

        assert_eq!(enabled_names(&board), vec!["x", "facebook"]);
        assert_dense_ranks(&board);
    }

    #[test]
    fn test_toggle_off_closes_rank_gap() {
        // Example from the display-order contract: disabling the middle entry
        // shifts later ranks down by one.
        let mut board = board_with(&[
            ("x", "https://x.com/a", true, 0),
            ("facebook", "https://facebook.com/a", true, 1),
            ("instagram", "https://instagram.com/a", true, 2),
        ]);

        board.toggle("facebook").unwrap();

        let get = |name: &str| {
            board
                .links()
                .iter()
                .find(|l| l.name == name)
                .unwrap()
                .clone()
        };
        assert!(get("x").enabled);
        assert_eq!(get("x").id, 0);
        assert!(!get("facebook").enabled);
        assert_eq!(get("facebook").id, 0);
        assert!(get("instagram").enabled);
        assert_eq!(get("instagram").id, 1);
        assert_dense_ranks(&board);
    }

    #[test]
    fn test_toggle_unknown_network() {
        let mut board = LinkBoard::from_catalog();
        assert_eq!(
            board.toggle("myspace"),
            Err(LinkError::UnknownNetwork("myspace".to_string()))
        );
    }

    #[test]
    fn test_set_url_does_not_affect_rank() {
        let mut board = board_with(&[("github", "https://github.com/a", true, 0)]);
        board.set_url("github", "not a url").unwrap();

        let github = board.links().iter().find(|l| l.name == "github").unwrap();
        assert!(github.enabled);
        assert_eq!(github.id, 0);
        assert_eq!(github.url, "not a url");
    }

    #[test]
    fn test_reorder_moves_and_renumbers() {
        let mut board = board_with(&[
            ("x", "https://x.com/a", true, 0),
            ("facebook", "https://facebook.com/a", true, 1),
            ("instagram", "https://instagram.com/a", true, 2),
        ]);

        board.reorder(0, 2).unwrap();

        assert_eq!(enabled_names(&board), vec!["facebook", "instagram", "x"]);
        assert_dense_ranks(&board);
    }

    #[test]
    fn test_reorder_ignores_disabled_entries() {
        let mut board = board_with(&[
            ("x", "https://x.com/a", true, 0),
            ("facebook", "", false, 0),
            ("instagram", "https://instagram.com/a", true, 1),
        ]);

        board.reorder(1, 0).unwrap();

        assert_eq!(enabled_names(&board), vec!["instagram", "x"]);
        let facebook = board.links().iter().find(|l| l.name == "facebook").unwrap();
        assert!(!facebook.enabled);
        assert_eq!(facebook.id, 0);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let mut board = board_with(&[("x", "https://x.com/a", true, 0)]);
        assert_eq!(board.reorder(1, 0), Err(LinkError::RankOutOfRange(1)));
        assert_eq!(board.reorder(0, 3), Err(LinkError::RankOutOfRange(3)));
    }

    #[test]
    fn test_deserialize_drops_unknown_networks() {
        let encoded = r#"[
            {"name":"github","url":"https://github.com/a","enabled":true,"id":0},
            {"name":"myspace","url":"https://myspace.com/a","enabled":true,"id":1}
        ]"#;

        let board = LinkBoard::deserialize(encoded).unwrap();
        assert!(board.links().iter().all(|l| l.name != "myspace"));
        assert_eq!(enabled_names(&board), vec!["github"]);
    }

    #[test]
    fn test_deserialize_synthesizes_missing_networks() {
        let board = LinkBoard::deserialize("[]").unwrap();
        assert_eq!(board.links().len(), SOCIAL_CATALOG.len());
        assert!(board.links().iter().all(|l| !l.enabled && l.url.is_empty()));
    }

    #[test]
    fn test_deserialize_rejects_malformed_input() {
        assert!(matches!(
            LinkBoard::deserialize("{ not json"),
            Err(LinkError::Malformed(_))
        ));
    }

    #[test]
    fn test_serialize_roundtrip_is_idempotent() {
        let mut board = LinkBoard::from_catalog();
        board.set_url("x", "https://x.com/a").unwrap();
        board.set_url("github", "https://github.com/a").unwrap();
        board.toggle("github").unwrap();
        board.toggle("x").unwrap();
        board.reorder(0, 1).unwrap();

        let once = LinkBoard::deserialize(&board.serialize()).unwrap();
        let twice = LinkBoard::deserialize(&once.serialize()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(
            enabled_names(&once)
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
            enabled_names(&board)
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_display_order_follows_rank_not_storage_order() {
        let board = board_with(&[
            ("linkedin", "https://linkedin.com/in/a", true, 1),
            ("github", "https://github.com/a", true, 0),
        ]);
        assert_eq!(enabled_names(&board), vec!["github", "linkedin"]);
    }
}
