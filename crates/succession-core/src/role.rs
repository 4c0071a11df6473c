//! Role kinds and their precedence.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A slot in the leadership hierarchy, or ordinary pool membership.
///
/// The string forms match the dataset's `type` field.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
  EnumIter,
)]
pub enum RoleKind {
  /// Ordinary membership of the general pool.
  Apostle,
  /// The single top role.
  President,
  #[serde(rename = "First Counselor")]
  #[strum(serialize = "First Counselor")]
  FirstCounselor,
  #[serde(rename = "Second Counselor")]
  #[strum(serialize = "Second Counselor")]
  SecondCounselor,
  /// An unnumbered counsellor; any number may serve at once.
  Counselor,
}

/// Display precedence, highest first. A person holding several valid
/// assignments on a date is labelled with the earliest entry here.
pub const PRECEDENCE: [RoleKind; 5] = [
  RoleKind::President,
  RoleKind::FirstCounselor,
  RoleKind::SecondCounselor,
  RoleKind::Counselor,
  RoleKind::Apostle,
];

impl RoleKind {
  /// Position in [`PRECEDENCE`]; lower ranks win.
  pub fn rank(self) -> usize {
    PRECEDENCE
      .iter()
      .position(|r| *r == self)
      .unwrap_or(PRECEDENCE.len())
  }

  /// The highest-precedence role in `roles`, or [`RoleKind::Apostle`] when
  /// there is none.
  pub fn best(roles: impl IntoIterator<Item = RoleKind>) -> RoleKind {
    roles
      .into_iter()
      .min_by_key(|r| r.rank())
      .unwrap_or(RoleKind::Apostle)
  }

  /// Long-form title used in event descriptions.
  pub fn title(self) -> &'static str {
    match self {
      Self::Apostle => "Apostle",
      Self::President => "President of the Church",
      Self::FirstCounselor => "First Counselor in the First Presidency",
      Self::SecondCounselor => "Second Counselor in the First Presidency",
      Self::Counselor => "Counselor in the First Presidency",
    }
  }

  /// Whether this is one of the subordinate (counsellor) roles.
  pub fn is_subordinate(self) -> bool {
    matches!(
      self,
      Self::FirstCounselor | Self::SecondCounselor | Self::Counselor
    )
  }
}
