//! The LLRP specification model.
//!
//! The protocol is described by data, not code: [`defs`] holds pre-compiled
//! tables generated offline from the LLRP 1.0.1 XML definitions, and
//! [`LlrpRegistry::load`] resolves them into the entities the codec,
//! validator, and session consume. Type numbers, field layouts, enumerations,
//! sub-parameter cardinalities, and vendor extensions all live here; the
//! rest of the crate is generic traversal driven by this model.

mod defs;
mod error;
mod model;
mod registry;

pub use error::SpecError;
pub use model::{
    Cardinality,
    CustomMessageKey,
    CustomParamKey,
    Encoding,
    EnumIdx,
    EnumSpec,
    FieldSpec,
    FieldType,
    MessageSpec,
    MsgIdx,
    ParamIdx,
    ParamSpec,
    SubParamRule,
    CUSTOM_TYPE,
    VENDOR_IMPINJ,
};
pub use registry::LlrpRegistry;
