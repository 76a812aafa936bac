//! Version selection for `mm switch`

use std::fmt;
use std::str::FromStr;

use crate::api::{CompileStatus, VersionListing};
use crate::error::{MmError, MmResult};

/// A version as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Number(u32),
    Latest,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Number(n) => write!(f, "{}", n),
            Version::Latest => f.write_str("latest"),
        }
    }
}

impl FromStr for Version {
    type Err = MmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "latest" {
            return Ok(Version::Latest);
        }
        s.parse::<u32>()
            .map(Version::Number)
            .map_err(|_| MmError::InvalidVersion(s.to_string()))
    }
}

/// clap value parser.
pub fn parse_version(s: &str) -> Result<Version, String> {
    s.parse().map_err(|e: MmError| e.to_string())
}

/// Resolve `requested` to a concrete number and check it can become active.
pub fn select(listing: &VersionListing, requested: Version) -> MmResult<u32> {
    let number = match requested {
        Version::Number(n) => n,
        Version::Latest => listing.latest().ok_or(MmError::NoVersions)?,
    };

    let info = listing
        .find(number)
        .ok_or(MmError::VersionNotFound(number))?;

    if info.compile_status != CompileStatus::Success {
        return Err(MmError::VersionNotSwitchable {
            version: number,
            status: info.compile_status.to_string(),
        });
    }

    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BotVersion;

    fn v(number: u32, status: CompileStatus) -> BotVersion {
        BotVersion {
            number,
            language: "python".to_string(),
            compile_status: status,
            compiled_at: String::new(),
            submitted_at: String::new(),
        }
    }

    fn listing(versions: Vec<BotVersion>) -> VersionListing {
        VersionListing {
            versions,
            active_version: None,
        }
    }

    #[test]
    fn parse_accepts_numbers_and_latest() {
        assert_eq!("7".parse::<Version>().unwrap(), Version::Number(7));
        assert_eq!(" latest ".parse::<Version>().unwrap(), Version::Latest);
    }

    #[test]
    fn parse_rejects_other_input() {
        assert_eq!(
            parse_version("newest").unwrap_err(),
            "Invalid version: 'newest'. Expected a number or 'latest'"
        );
        assert!(parse_version("-1").is_err());
        assert!(parse_version("Latest").is_err());
    }

    #[test]
    fn latest_picks_highest_number_not_last_entry() {
        let l = listing(vec![
            v(5, CompileStatus::Success),
            v(2, CompileStatus::Success),
        ]);
        assert_eq!(select(&l, Version::Latest).unwrap(), 5);
    }

    #[test]
    fn latest_with_no_versions_fails() {
        let err = select(&listing(vec![]), Version::Latest).unwrap_err();
        assert_eq!(err.to_string(), "No versions available to switch to");
    }

    #[test]
    fn unknown_version_fails() {
        let l = listing(vec![v(1, CompileStatus::Success)]);
        let err = select(&l, Version::Number(9)).unwrap_err();
        assert_eq!(err.to_string(), "Version 9 not found");
    }

    #[test]
    fn failed_or_pending_versions_cannot_be_selected() {
        let l = listing(vec![
            v(1, CompileStatus::Failure),
            v(2, CompileStatus::Pending),
        ]);
        assert_eq!(
            select(&l, Version::Number(1)).unwrap_err().to_string(),
            "Version 1 has status 'failure', cannot switch"
        );
        assert_eq!(
            select(&l, Version::Latest).unwrap_err().to_string(),
            "Version 2 has status 'pending', cannot switch"
        );
    }
}
