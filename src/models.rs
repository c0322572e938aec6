use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Facets requested for every trend query.
pub const MONTH_FACET: &str = "publication_month";
pub const PAGE_FACET: &str = "page_facet";
pub const DESCRIPTOR_FACET: &str = "des_facet";
pub const PERSON_FACET: &str = "per_facet";

/// One side of a comparison: free-text query scoped to a publication year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendQuery {
    pub query: String,
    pub year: i32,
}

impl TrendQuery {
    pub fn new(query: impl Into<String>, year: i32) -> Self {
        Self {
            query: query.into(),
            year,
        }
    }

    /// Free-text query with the year filter clause appended,
    /// e.g. `palin publication_year:[2008]`.
    pub fn to_query_param(&self) -> String {
        format!("{} publication_year:[{}]", self.query, self.year)
    }
}

/// Decoded response of the article search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResult {
    /// An empty `[]` or `null` block, and `null` facet lists, count as no facet data.
    #[serde(default, deserialize_with = "de_facet_block")]
    pub facets: Option<HashMap<String, Vec<FacetEntry>>>,
    #[serde(default)]
    pub results: Vec<Article>,
}

impl ApiResult {
    /// Entries of a named facet, if the response carries it.
    pub fn facet(&self, name: &str) -> Option<&[FacetEntry]> {
        self.facets
            .as_ref()
            .and_then(|f| f.get(name))
            .map(|v| v.as_slice())
    }
}

/// A single `{term, count}` pair of a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetEntry {
    /// Month and page facets sometimes come back as numbers; normalize to text.
    #[serde(deserialize_with = "de_string_from_string_or_number")]
    pub term: String,
    #[serde(deserialize_with = "de_u64_from_string_or_number")]
    pub count: u64,
}

/// Article summary as returned in `results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub small_image_url: Option<String>,
}

/// Article counts per month, index 0 = January.
pub type MonthlyCounts = [u64; 12];

/// Article counts per printed page; only pages with articles are present.
pub type PageCounts = BTreeMap<u32, u64>;

/// Facet terms ordered by descending count.
pub type RankedFacetList = Vec<(String, u64)>;

/// Serde helper: parse `u64` from either a JSON number or a string.
fn de_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative count")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("negative value for article count"));
            }
            Ok(v as u64)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<u64>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

/// Serde helper: accept a facet term given as a string or a bare number.
fn de_string_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct TermVisitor;

    impl<'de> Visitor<'de> for TermVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or number facet term")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(s.to_string())
        }
    }

    deserializer.deserialize_any(TermVisitor)
}

/// Serde helper: read the `facets` block, which the API sends as an object when
/// facets matched and as an empty array (or `null`) when none did.
fn de_facet_block<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, Vec<FacetEntry>>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
    struct FacetBlockVisitor;

    impl<'de> Visitor<'de> for FacetBlockVisitor {
        type Value = Option<HashMap<String, Vec<FacetEntry>>>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a map of facet lists, an array or null")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut facets = HashMap::new();
            while let Some((name, entries)) =
                map.next_entry::<String, Option<Vec<FacetEntry>>>()?
            {
                if let Some(entries) = entries {
                    facets.insert(name, entries);
                }
            }
            Ok(Some(facets))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(FacetBlockVisitor)
}
