//! Closed enumerations reported by the API and their string codec.
//!
//! Every enum has a fixed table of canonical strings. Parsing is
//! case-insensitive and never falls back to a default: text outside the
//! table is an [`UnknownEnumValue`], which callers are expected to handle
//! since the server adds new values over time.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which enum a symbol (or a failed parse) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumKind {
    SyncState,
    Permission,
    SharedLinkAccess,
    CollaborationRole,
    UploadEmailAccess,
}

impl EnumKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SyncState => "sync_state",
            Self::Permission => "permission",
            Self::SharedLinkAccess => "shared_link_access",
            Self::CollaborationRole => "collaboration_role",
            Self::UploadEmailAccess => "upload_email_access",
        }
    }
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that matched no entry of an enum's table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} value {text:?}")]
pub struct UnknownEnumValue {
    pub kind: EnumKind,
    pub text: String,
}

/// A closed enum with a canonical string table.
pub trait EnumSymbol: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const KIND: EnumKind;

    /// Every variant paired with its canonical string.
    const TABLE: &'static [(Self, &'static str)];

    /// Canonical string form.
    fn as_str(self) -> &'static str;

    fn into_symbol(self) -> Symbol;

    fn from_symbol(symbol: &Symbol) -> Option<Self>;

    /// Case-insensitive lookup in [`Self::TABLE`].
    fn parse(text: &str) -> Result<Self, UnknownEnumValue> {
        Self::TABLE
            .iter()
            .find(|(_, canonical)| canonical.eq_ignore_ascii_case(text))
            .map(|(value, _)| *value)
            .ok_or_else(|| UnknownEnumValue {
                kind: Self::KIND,
                text: text.to_owned(),
            })
    }
}

macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl EnumSymbol for $name {
            const KIND: EnumKind = EnumKind::$name;
            const TABLE: &'static [(Self, &'static str)] = &[ $( (Self::$variant, $text) ),+ ];

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }

            fn into_symbol(self) -> Symbol {
                Symbol::$name(self)
            }

            fn from_symbol(symbol: &Symbol) -> Option<Self> {
                match symbol {
                    Symbol::$name(value) => Some(*value),
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as EnumSymbol>::parse(s)
            }
        }
    };
}

symbol_enum! {
    /// Whether a folder is synced to the user's desktop clients.
    pub enum SyncState {
        Synced = "synced",
        NotSynced = "not_synced",
        PartiallySynced = "partially_synced",
    }
}

symbol_enum! {
    /// An action the current user may perform on an item.
    pub enum Permission {
        CanPreview = "can_preview",
        CanDownload = "can_download",
        CanUpload = "can_upload",
        CanInviteCollaborator = "can_invite_collaborator",
        CanRename = "can_rename",
        CanDelete = "can_delete",
        CanShare = "can_share",
        CanSetShareAccess = "can_set_share_access",
        CanComment = "can_comment",
    }
}

symbol_enum! {
    /// Who can open a shared link.
    pub enum SharedLinkAccess {
        Open = "open",
        Company = "company",
        Collaborators = "collaborators",
    }
}

symbol_enum! {
    /// Role granted to a collaborator on a folder.
    pub enum CollaborationRole {
        Owner = "owner",
        CoOwner = "co-owner",
        Editor = "editor",
        ViewerUploader = "viewer uploader",
        PreviewerUploader = "previewer uploader",
        Viewer = "viewer",
        Previewer = "previewer",
        Uploader = "uploader",
    }
}

symbol_enum! {
    /// Who may email files into a folder's upload address.
    pub enum UploadEmailAccess {
        Open = "open",
        Collaborators = "collaborators",
    }
}

/// A decoded enum value of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    SyncState(SyncState),
    Permission(Permission),
    SharedLinkAccess(SharedLinkAccess),
    CollaborationRole(CollaborationRole),
    UploadEmailAccess(UploadEmailAccess),
}

impl Symbol {
    /// Parses `text` against the table of the given enum kind.
    pub fn parse(kind: EnumKind, text: &str) -> Result<Self, UnknownEnumValue> {
        match kind {
            EnumKind::SyncState => SyncState::parse(text).map(Self::SyncState),
            EnumKind::Permission => Permission::parse(text).map(Self::Permission),
            EnumKind::SharedLinkAccess => SharedLinkAccess::parse(text).map(Self::SharedLinkAccess),
            EnumKind::CollaborationRole => {
                CollaborationRole::parse(text).map(Self::CollaborationRole)
            }
            EnumKind::UploadEmailAccess => {
                UploadEmailAccess::parse(text).map(Self::UploadEmailAccess)
            }
        }
    }

    pub fn kind(&self) -> EnumKind {
        match self {
            Self::SyncState(_) => EnumKind::SyncState,
            Self::Permission(_) => EnumKind::Permission,
            Self::SharedLinkAccess(_) => EnumKind::SharedLinkAccess,
            Self::CollaborationRole(_) => EnumKind::CollaborationRole,
            Self::UploadEmailAccess(_) => EnumKind::UploadEmailAccess,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SyncState(v) => v.as_str(),
            Self::Permission(v) => v.as_str(),
            Self::SharedLinkAccess(v) => v.as_str(),
            Self::CollaborationRole(v) => v.as_str(),
            Self::UploadEmailAccess(v) => v.as_str(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
