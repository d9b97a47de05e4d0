//! Page sections: typed variants, their discriminators and shapes, and the
//! normalization applied before rendering.

mod kind;
mod model;
mod normalize;

pub use kind::{link, section_shape, SectionKind, SECTION_TAG, SECTION_TAG_ALIAS};
pub use model::*;
pub use normalize::{
    normalize_sections, AnchorSet, KeyedSection, SectionKey, SectionNormalizer,
    DEFAULT_PROMOTE_KEYWORDS, RESERVED_ANCHORS,
};
