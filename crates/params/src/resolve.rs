//! Resolution of raw textual input against declared parameters.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{debug, trace};

use crate::error::{ParameterError, ParameterResult};
use crate::parameter::{Parameter, ParameterDescriptor};
use crate::value::{BoxedValue, ParameterValue};

struct ResolvedEntry {
    value: BoxedValue,
    type_name: &'static str,
}

/// Typed values produced by one resolution, keyed by parameter name.
///
/// Built once per invocation and read-only afterwards. Typed retrieval is
/// keyed by the original generic declaration, which is what keeps call
/// sites type-safe despite the erased storage underneath.
pub struct ResolvedParameters {
    values: HashMap<String, ResolvedEntry>,
}

impl ResolvedParameters {
    /// Resolves raw name to text pairs against the declared descriptors.
    ///
    /// Duplicate declared names are rejected before any value is decoded;
    /// they are an authoring error, not an input error. All or nothing
    /// after that: the first failure aborts the whole resolution and no
    /// partial result escapes. Name matching is case-sensitive and exact.
    /// Raw names matching no declaration are ignored; splitting and
    /// validating the token stream is the tokenizer's job, not this one's.
    pub fn resolve(
        parameters: &[&dyn ParameterDescriptor],
        raw: &HashMap<String, String>,
    ) -> ParameterResult<Self> {
        let mut seen = HashSet::with_capacity(parameters.len());
        for parameter in parameters {
            let name = parameter.name();
            if !seen.insert(name.clone()) {
                return Err(ParameterError::duplicate(name));
            }
        }

        let mut values = HashMap::with_capacity(parameters.len());
        for parameter in parameters {
            let name = parameter.name();
            let Some(text) = raw.get(&name) else {
                if parameter.is_required() {
                    return Err(ParameterError::missing(name));
                }
                trace!(parameter = %name, "optional parameter absent");
                continue;
            };

            let declared = parameter.value_type();
            let Some(value) = declared.decode(text) else {
                return Err(ParameterError::decode(name, text.clone(), declared.name()));
            };
            trace!(parameter = %name, decoded_as = declared.name(), "decoded parameter");
            values.insert(
                name,
                ResolvedEntry {
                    value,
                    type_name: declared.name(),
                },
            );
        }

        for name in raw.keys() {
            if !seen.contains(name) {
                debug!(name = %name, "raw input matches no declared parameter");
            }
        }

        debug!(
            resolved = values.len(),
            declared = parameters.len(),
            "parameter resolution complete"
        );
        Ok(Self { values })
    }

    /// Retrieves the value for a required declaration.
    ///
    /// Fails with a missing-parameter error when the name is absent, and
    /// with a type mismatch when the stored value was decoded under a
    /// different declared type. The mismatch is an internal-consistency
    /// fault, never a user input problem, and is reported rather than
    /// coerced.
    pub fn require<T: ParameterValue>(&self, parameter: &Parameter<T>) -> ParameterResult<T> {
        let name = parameter.name();
        match self.entry::<T>(&name)? {
            Some(value) => Ok(value),
            None => Err(ParameterError::missing(name)),
        }
    }

    /// Retrieves the value for an optional declaration, `None` when the
    /// parameter resolved to nothing.
    pub fn get<T: ParameterValue>(&self, parameter: &Parameter<T>) -> ParameterResult<Option<T>> {
        let name = parameter.name();
        self.entry::<T>(&name)
    }

    fn entry<T: ParameterValue>(&self, name: &str) -> ParameterResult<Option<T>> {
        let Some(entry) = self.values.get(name) else {
            return Ok(None);
        };
        match entry.value.downcast_ref::<T>() {
            Some(value) => Ok(Some(value.clone())),
            None => Err(ParameterError::type_mismatch(
                name,
                T::TYPE_NAME,
                entry.type_name,
            )),
        }
    }

    /// Whether a value resolved under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of resolved values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing resolved, possible when every declaration is
    /// optional.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names that resolved to a value, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl fmt::Debug for ResolvedParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.iter().map(|(name, entry)| (name, entry.type_name)))
            .finish()
    }
}
