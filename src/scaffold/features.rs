//! Feature flags and tolerant feature-string resolution.

use std::fmt;
use std::str::FromStr;

/// A named optional capability that gates a section of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Template,
    Style,
    Computed,
    Lifecycle,
    Store,
    Typescript,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Template,
        Feature::Style,
        Feature::Computed,
        Feature::Lifecycle,
        Feature::Store,
        Feature::Typescript,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Template => "template",
            Feature::Style => "style",
            Feature::Computed => "computed",
            Feature::Lifecycle => "lifecycle",
            Feature::Store => "store",
            Feature::Typescript => "typescript",
        }
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "template" => Ok(Feature::Template),
            "style" => Ok(Feature::Style),
            "computed" => Ok(Feature::Computed),
            "lifecycle" => Ok(Feature::Lifecycle),
            "store" => Ok(Feature::Store),
            "typescript" => Ok(Feature::Typescript),
            _ => Err(format!("unknown feature '{}'", s)),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical set of resolved features for one generation request.
///
/// Iteration follows first-seen insertion order, seeded defaults-first,
/// so any output derived from iteration is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl FeatureSet {
    /// Features every generated component gets whether requested or not.
    pub const DEFAULTS: [Feature; 2] = [Feature::Typescript, Feature::Style];

    /// Resolve a raw comma-separated feature string into a canonical set.
    ///
    /// Tolerant parsing: tokens are trimmed, empty tokens and unrecognized
    /// names are dropped without error, duplicates collapse. The mandatory
    /// defaults are always present. An empty raw string resolves to exactly
    /// the defaults.
    pub fn resolve(raw: &str) -> FeatureSet {
        Self::resolve_with(raw, &Self::DEFAULTS)
    }

    /// Resolve against an explicit set of mandatory defaults.
    pub fn resolve_with(raw: &str, defaults: &[Feature]) -> FeatureSet {
        let mut set = FeatureSet {
            features: Vec::new(),
        };
        for feature in defaults {
            set.insert(*feature);
        }
        for token in raw.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Ok(feature) = token.parse::<Feature>() {
                set.insert(feature);
            }
        }
        set
    }

    fn insert(&mut self, feature: Feature) {
        if !self.features.contains(&feature) {
            self.features.push(feature);
        }
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
