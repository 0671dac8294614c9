use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kinds of definitions an API index knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Class = 0,
    Interface = 1,
    Trait = 2,
    Function = 3,
}

#[derive(Debug)]
pub struct KindInfo {
    pub slug: &'static str,
    pub root_label: &'static str,
    pub url_root: &'static str,
}

/// Indexed by the enum discriminant.
const KINDS: [KindInfo; 4] = [
    KindInfo {
        slug: "class",
        root_label: "Classes",
        url_root: "/hack/reference/class/",
    },
    KindInfo {
        slug: "interface",
        root_label: "Interfaces",
        url_root: "/hack/reference/interface/",
    },
    KindInfo {
        slug: "trait",
        root_label: "Traits",
        url_root: "/hack/reference/trait/",
    },
    KindInfo {
        slug: "function",
        root_label: "Functions",
        url_root: "/hack/reference/function/",
    },
];

impl EntityKind {
    /// All kinds, in the order their roots appear in a nav tree.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Class,
        EntityKind::Interface,
        EntityKind::Trait,
        EntityKind::Function,
    ];

    /// Kinds whose records carry methods.
    pub const CLASS_LIKE: [EntityKind; 3] =
        [EntityKind::Class, EntityKind::Interface, EntityKind::Trait];

    pub fn info(self) -> &'static KindInfo {
        &KINDS[self as usize]
    }

    pub fn slug(self) -> &'static str {
        self.info().slug
    }

    pub fn root_label(self) -> &'static str {
        self.info().root_label
    }

    pub fn url_root(self) -> &'static str {
        self.info().url_root
    }

    pub fn is_class_like(self) -> bool {
        !matches!(self, EntityKind::Function)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    /// Accepts either the slug (`trait`) or the root label (`Traits`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| {
                s.eq_ignore_ascii_case(kind.slug()) || s.eq_ignore_ascii_case(kind.root_label())
            })
            .ok_or_else(|| Error::UnknownEntityKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn table_matches_kinds() {
        let rows = EntityKind::ALL
            .iter()
            .map(|kind| (kind.root_label(), kind.url_root()))
            .collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec![
                ("Classes", "/hack/reference/class/"),
                ("Interfaces", "/hack/reference/interface/"),
                ("Traits", "/hack/reference/trait/"),
                ("Functions", "/hack/reference/function/"),
            ]
        );
    }

    #[test]
    fn url_root_is_built_from_slug() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.url_root(), format!("/hack/reference/{}/", kind.slug()));
        }
    }

    #[test]
    fn parse_slug_and_label() {
        assert_eq!("class".parse::<EntityKind>().unwrap(), EntityKind::Class);
        assert_eq!("Traits".parse::<EntityKind>().unwrap(), EntityKind::Trait);
        assert_eq!("INTERFACE".parse::<EntityKind>().unwrap(), EntityKind::Interface);
        assert_eq!("functions".parse::<EntityKind>().unwrap(), EntityKind::Function);
    }

    #[test]
    fn parse_unknown_kind() {
        let err = "enum".parse::<EntityKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownEntityKind(ref s) if s == "enum"));
    }

    #[test]
    fn only_functions_are_not_class_like() {
        assert_eq!(
            EntityKind::ALL
                .into_iter()
                .filter(|kind| kind.is_class_like())
                .collect::<Vec<_>>(),
            EntityKind::CLASS_LIKE.to_vec()
        );
    }
}
