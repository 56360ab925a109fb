//! Data types for the product search API
//!
//! All entities are remote-owned resources mirrored locally as transient
//! request/response messages; the local process holds no authoritative state.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A server-side collection of reference images usable for product search
///
/// Note: a catalog is not returned by listings until at least one reference
/// image has been added to it, so callers must retain the name returned at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Provider-assigned resource name (`productSearch/catalogs/{id}`)
    #[serde(default)]
    pub name: String,
}

/// Creation-time catalog configuration
///
/// Every catalog attribute is currently provider-assigned, so this carries no
/// fields; it exists so creation sends an explicit representation rather than
/// an untyped empty object, and so future optional fields have a home.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSpec {}

/// One indexed image associated with a product ID and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImage {
    /// Resource name (`productSearch/catalogs/{id}/referenceImages/{id}`)
    #[serde(default)]
    pub name: String,

    /// Remote storage locator of the image content
    #[serde(default)]
    pub image_uri: String,

    /// Caller-chosen product identifier
    #[serde(default)]
    pub product_id: String,

    /// Product domain assigned by the service
    #[serde(default)]
    pub category: Category,
}

/// Product domain of a reference image
///
/// The wire format carries either the canonical string name or the raw
/// integer tag. Tags this build does not know are preserved in
/// `Unrecognized` instead of failing, and `label` is total over all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Unspecified,
    Shoes,
    Bags,
    /// Any tag the service sends that this build does not know
    Unrecognized(i32),
}

impl Category {
    /// Map an enumeration tag to a category; unknown tags are preserved
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            0 => Self::Unspecified,
            1 => Self::Shoes,
            2 => Self::Bags,
            other => Self::Unrecognized(other),
        }
    }

    /// The enumeration tag for this category
    pub fn tag(&self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Shoes => 1,
            Self::Bags => 2,
            Self::Unrecognized(tag) => *tag,
        }
    }

    /// Human-readable label; defined for every value including unknown tags
    pub fn label(&self) -> String {
        match self {
            Self::Unspecified => "PRODUCT_SEARCH_CATEGORY_UNSPECIFIED".to_string(),
            Self::Shoes => "SHOES".to_string(),
            Self::Bags => "BAGS".to_string(),
            Self::Unrecognized(tag) => format!("UNKNOWN_CATEGORY_{tag}"),
        }
    }

    fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "PRODUCT_SEARCH_CATEGORY_UNSPECIFIED" => Some(Self::Unspecified),
            "SHOES" => Some(Self::Shoes),
            "BAGS" => Some(Self::Bags),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unrecognized(tag) => serializer.serialize_i32(*tag),
            known => serializer.serialize_str(&known.label()),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoryVisitor;

        impl<'de> Visitor<'de> for CategoryVisitor {
            type Value = Category;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a category name or integer tag")
            }

            fn visit_str<E>(self, value: &str) -> Result<Category, E>
            where
                E: de::Error,
            {
                Category::from_wire_name(value).ok_or_else(|| {
                    de::Error::unknown_variant(
                        value,
                        &["PRODUCT_SEARCH_CATEGORY_UNSPECIFIED", "SHOES", "BAGS"],
                    )
                })
            }

            fn visit_i64<E>(self, value: i64) -> Result<Category, E>
            where
                E: de::Error,
            {
                let tag = i32::try_from(value)
                    .map_err(|_| de::Error::custom(format!("category tag out of range: {value}")))?;
                Ok(Category::from_tag(tag))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Category, E>
            where
                E: de::Error,
            {
                let tag = i32::try_from(value)
                    .map_err(|_| de::Error::custom(format!("category tag out of range: {value}")))?;
                Ok(Category::from_tag(tag))
            }
        }

        deserializer.deserialize_any(CategoryVisitor)
    }
}

/// Handle to a server-side asynchronous bulk-import job
///
/// The caller is responsible for polling or awaiting completion; this client
/// only hands back the handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Provider-assigned operation name
    #[serde(default)]
    pub name: String,

    /// Whether the job has completed
    #[serde(default)]
    pub done: bool,
}

/// One page of a reference image listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImagePage {
    #[serde(default)]
    pub reference_images: Vec<ReferenceImage>,

    /// Cursor for the next page; absent or empty on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}
