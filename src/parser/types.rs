use serde::Deserialize;

// SourceKit accessibility UIDs as they appear in `key.accessibility`.
const ACCESSIBILITY_PRIVATE: &str = "source.lang.swift.accessibility.private";
const ACCESSIBILITY_FILEPRIVATE: &str = "source.lang.swift.accessibility.fileprivate";
const ACCESSIBILITY_INTERNAL: &str = "source.lang.swift.accessibility.internal";
const ACCESSIBILITY_PUBLIC: &str = "source.lang.swift.accessibility.public";
const ACCESSIBILITY_OPEN: &str = "source.lang.swift.accessibility.open";

// Declaration kinds whose members are rendered as a nested, brace-delimited body.
const CONTAINER_KINDS: [&str; 9] = [
    "source.lang.swift.decl.struct",
    "source.lang.swift.decl.class",
    "source.lang.swift.decl.enum",
    "source.lang.swift.decl.protocol",
    "source.lang.swift.decl.extension",
    "source.lang.swift.decl.extension.class",
    "source.lang.swift.decl.extension.enum",
    "source.lang.swift.decl.extension.protocol",
    "source.lang.swift.decl.extension.struct",
];

const ENUM_CASE_GROUP_KIND: &str = "source.lang.swift.decl.enumcase";

/// Swift visibility classification, ordered from most to least restrictive.
///
/// Variant order gives the total order used for filtering:
/// `private < fileprivate < internal < public < open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessLevel {
    Private,
    Fileprivate,
    Internal,
    Public,
    Open,
}

impl AccessLevel {
    /// Parses a raw `key.accessibility` UID. Never fails: anything
    /// unrecognized or absent maps to the most restrictive level.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(ACCESSIBILITY_FILEPRIVATE) => AccessLevel::Fileprivate,
            Some(ACCESSIBILITY_INTERNAL) => AccessLevel::Internal,
            Some(ACCESSIBILITY_PUBLIC) => AccessLevel::Public,
            Some(ACCESSIBILITY_OPEN) => AccessLevel::Open,
            Some(ACCESSIBILITY_PRIVATE) | Some(_) | None => AccessLevel::Private,
        }
    }

    /// Parses a bare level name as given on the command line. Unlike
    /// [`AccessLevel::parse`] this rejects unknown names, so a typo does not
    /// silently widen the generated interface.
    pub fn from_flag(raw: &str) -> anyhow::Result<Self> {
        match raw {
            "private" => Ok(AccessLevel::Private),
            "fileprivate" => Ok(AccessLevel::Fileprivate),
            "internal" => Ok(AccessLevel::Internal),
            "public" => Ok(AccessLevel::Public),
            "open" => Ok(AccessLevel::Open),
            other => Err(anyhow::anyhow!(
                "unrecognized access level '{}' (expected private, fileprivate, internal, public or open)",
                other
            )),
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AccessLevel::Private => "private",
            AccessLevel::Fileprivate => "fileprivate",
            AccessLevel::Internal => "internal",
            AccessLevel::Public => "public",
            AccessLevel::Open => "open",
        };
        write!(f, "{}", name)
    }
}

/// Raw node shape as emitted by `sourcekitten doc`, preserved key names and all.
#[derive(Debug, Default, Deserialize)]
pub struct RawDeclaration {
    #[serde(rename = "key.kind")]
    pub kind: Option<String>,
    #[serde(rename = "key.name")]
    pub name: Option<String>,
    #[serde(rename = "key.accessibility")]
    pub accessibility: Option<String>,
    #[serde(rename = "key.doc.comment")]
    pub doc_comment: Option<String>,
    #[serde(rename = "key.parsed_declaration")]
    pub parsed_declaration: Option<String>,
    #[serde(rename = "key.substructure", default)]
    pub substructure: Vec<RawDeclaration>,
}

/// Typed read-only view over one node of the parsed declaration tree.
///
/// Built once at ingestion; nothing downstream of the parser touches the raw
/// `key.*` maps again.
#[derive(Debug, Clone)]
pub struct DeclarationRecord {
    /// Declaration UID (`source.lang.swift.decl.*`); `None` for the
    /// synthetic per-file root.
    pub kind: Option<String>,
    pub name: Option<String>,
    pub access: AccessLevel,
    pub documentation: Option<String>,
    /// Already-rendered declaration header, e.g. `"public struct Point"`.
    /// A node without one cannot be rendered standalone.
    pub signature: Option<String>,
    /// Child declarations in source order.
    pub children: Vec<DeclarationRecord>,
}

impl DeclarationRecord {
    /// The kind-less grouping node that holds a file's top-level declarations.
    pub fn file_root(children: Vec<DeclarationRecord>) -> Self {
        DeclarationRecord {
            kind: None,
            name: None,
            access: AccessLevel::Private,
            documentation: None,
            signature: None,
            children,
        }
    }

    /// True iff this node's children are rendered as a nested body.
    pub fn is_container_kind(&self) -> bool {
        match self.kind.as_deref() {
            Some(kind) => CONTAINER_KINDS.contains(&kind),
            None => false,
        }
    }

    /// True iff this is an enum case list whose children are bare case names.
    pub fn is_enum_case_group(&self) -> bool {
        self.kind.as_deref() == Some(ENUM_CASE_GROUP_KIND)
    }
}

impl From<RawDeclaration> for DeclarationRecord {
    fn from(raw: RawDeclaration) -> Self {
        DeclarationRecord {
            kind: raw.kind,
            name: raw.name,
            access: AccessLevel::parse(raw.accessibility.as_deref()),
            documentation: raw.doc_comment,
            signature: raw.parsed_declaration,
            children: raw.substructure.into_iter().map(Into::into).collect(),
        }
    }
}
