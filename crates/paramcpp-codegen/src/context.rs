use indexmap::IndexMap;

/// Parameter definitions handed to the renderers.
///
/// Nothing fills this map yet: the JSON reference given to
/// [`WrapperEmitter::generate`](crate::WrapperEmitter::generate) is never
/// read, and the renderers produce the same text whatever it holds.
pub type ParameterData = IndexMap<String, serde_json::Value>;
