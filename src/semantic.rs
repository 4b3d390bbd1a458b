//! Semantic version model: parsing, increments, comparison and formatting
//!
//! Versions have the shape `MAJOR.MINOR.PATCH` with an optional
//! `-PRERELEASE` suffix on the patch field, where the pre-release label is
//! `NAME` or `NAME.COUNTER`.

use crate::error::{Result, SemanticError};
use std::fmt;
use std::str::FromStr;

/// Pre-release track names with independently counted iterations.
const RELEASE_TRACK: &str = "RELEASE";
const BETA_TRACK: &str = "BETA";
const ALPHA_TRACK: &str = "ALPHA";

/// A parsed semantic version.
///
/// `is_pre` is an explicit flag rather than being derived from `pre`:
/// an increment may install a freshly built label, and the pair is only
/// ever set together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semantic {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre: String,
    pub is_pre: bool,
}

/// Which increments to apply, in the fixed order
/// major → minor → patch → release → beta → alpha.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IncrementFlags {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub release: bool,
    pub beta: bool,
    pub alpha: bool,
}

impl Semantic {
    /// Create a new version with no pre-release label
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Semantic {
            major,
            minor,
            patch,
            pre: String::new(),
            is_pre: false,
        }
    }

    /// Parse a version string (e.g., "1.2.3" or "1.2.3-BETA.0")
    ///
    /// The text is split on `.` into at most three fields, so anything after
    /// the second dot is folded into the patch field ("1.0.0.alpha" fails
    /// patch parsing rather than field counting). The patch field is then
    /// split on the first `-` to peel off the pre-release label.
    pub fn parse(text: &str) -> Result<Self> {
        let items: Vec<&str> = text.splitn(3, '.').collect();

        if items.len() < 3 {
            return Err(SemanticError::VersionIsNotValid);
        }

        let major = items[0]
            .parse::<u32>()
            .map_err(|_| SemanticError::MajorVersionIsNotValid)?;

        let minor = items[1]
            .parse::<u32>()
            .map_err(|_| SemanticError::MinorVersionIsNotValid)?;

        let patch_items: Vec<&str> = items[2].splitn(2, '-').collect();

        let patch = patch_items[0]
            .parse::<u32>()
            .map_err(|_| SemanticError::PatchVersionIsNotValid)?;

        let mut semantic = Semantic::new(major, minor, patch);

        if patch_items.len() > 1 {
            semantic.pre = patch_items[1].to_string();
            semantic.is_pre = true;
        }

        Ok(semantic)
    }

    /// Apply the requested increments in the fixed order
    pub fn apply_increments(&mut self, flags: &IncrementFlags) {
        if flags.major {
            self.increment_major();
        }

        if flags.minor {
            self.increment_minor();
        }

        if flags.patch {
            self.increment_patch();
        }

        if flags.release {
            self.increment_release();
        }

        if flags.beta {
            self.increment_beta();
        }

        if flags.alpha {
            self.increment_alpha();
        }
    }

    /// Bump the major version, resetting minor/patch and the pre-release
    pub fn increment_major(&mut self) {
        self.major += 1;
        self.minor = 0;
        self.patch = 0;
        self.clear_pre_release();
    }

    /// Bump the minor version, resetting patch and the pre-release
    pub fn increment_minor(&mut self) {
        self.minor += 1;
        self.patch = 0;
        self.clear_pre_release();
    }

    /// Bump the patch version, resetting the pre-release
    pub fn increment_patch(&mut self) {
        self.patch += 1;
        self.clear_pre_release();
    }

    /// Bump the RELEASE pre-release counter (or start at RELEASE.0)
    pub fn increment_release(&mut self) {
        self.increment_pre_release(RELEASE_TRACK);
    }

    /// Bump the BETA pre-release counter (or start at BETA.0)
    pub fn increment_beta(&mut self) {
        self.increment_pre_release(BETA_TRACK);
    }

    /// Bump the ALPHA pre-release counter (or start at ALPHA.0)
    pub fn increment_alpha(&mut self) {
        self.increment_pre_release(ALPHA_TRACK);
    }

    /// Advance the counter of the given pre-release track.
    ///
    /// Tracks match by label prefix, and the label keeps its own name part
    /// when the counter is bumped ("RELEASE-custom" stays "RELEASE-custom").
    /// An unparsable counter is treated as 0 before incrementing. Off-track
    /// labels (and non-pre-release versions) reset to `{track}.0`.
    fn increment_pre_release(&mut self, track: &str) {
        if self.is_pre && self.pre.starts_with(track) {
            match self.pre.split_once('.') {
                Some((name, counter)) => {
                    let next = counter.parse::<u32>().unwrap_or(0) + 1;
                    self.pre = format!("{}.{}", name, next);
                }
                None => self.pre.push_str(".0"),
            }
        } else {
            self.pre = format!("{}.0", track);
            self.is_pre = true;
        }
    }

    fn clear_pre_release(&mut self) {
        self.pre.clear();
        self.is_pre = false;
    }

    /// Lossy ordering composite: `major*100 + minor*10 + patch`.
    ///
    /// Components ≥ 10 collide across positions (0.1.0 ranks equal to
    /// 0.0.10). Retained as-is; callers wanting strict precedence must not
    /// rely on rank.
    pub fn rank(&self) -> u64 {
        u64::from(self.major) * 100 + u64::from(self.minor) * 10 + u64::from(self.patch)
    }

    /// Rank-based strict ordering; ignores pre-release labels
    pub fn greater_than(&self, other: &Semantic) -> bool {
        self.rank() > other.rank()
    }

    /// Rank-based strict ordering; ignores pre-release labels
    pub fn less_than(&self, other: &Semantic) -> bool {
        self.rank() < other.rank()
    }

    /// Equal rank and byte-identical pre-release label
    pub fn equal(&self, other: &Semantic) -> bool {
        self.rank() == other.rank() && self.pre == other.pre
    }
}

impl FromStr for Semantic {
    type Err = SemanticError;

    fn from_str(s: &str) -> Result<Self> {
        Semantic::parse(s)
    }
}

impl fmt::Display for Semantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_pre {
            write!(f, "-{}", self.pre)?;
        }
        Ok(())
    }
}

/// Parse both versions and evaluate `version1 <operator> version2`.
///
/// Recognized operators are `>`, `>=`, `<`, `<=` and `==`; anything else
/// evaluates to `false` without an error. The first parse failure (left
/// side first) is returned as-is.
pub fn compare(version1: &str, operator: &str, version2: &str) -> Result<bool> {
    let v1 = Semantic::parse(version1)?;
    let v2 = Semantic::parse(version2)?;

    let result = match operator {
        ">" => v1.greater_than(&v2),
        ">=" => v1.equal(&v2) || v1.greater_than(&v2),
        "<" => v1.less_than(&v2),
        "<=" => v1.equal(&v2) || v1.less_than(&v2),
        "==" => v1.equal(&v2),
        _ => false,
    };

    Ok(result)
}
