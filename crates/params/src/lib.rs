//! # termkit-params
//!
//! Typed parameter declaration and resolution for command-line tools.
//!
//! Commands declare what they accept as [`Parameter`] values: a name, an
//! optional help text and a concrete value type. Declarations are erased to
//! [`ParameterDescriptor`] trait objects so mixed sets can be stored, listed
//! and rendered uniformly. At invocation time, [`ResolvedParameters`] decodes
//! raw textual input against the declared types in one all-or-nothing pass;
//! the original typed declarations then retrieve their values back with full
//! type safety.
//!
//! ```
//! use std::collections::HashMap;
//! use termkit_params::{Parameter, ParameterDescriptor, ResolvedParameters};
//!
//! let name = Parameter::<String>::argument_named("name");
//! let count = Parameter::<i64>::option_named("count");
//!
//! let mut raw = HashMap::new();
//! raw.insert("name".to_string(), "world".to_string());
//! raw.insert("count".to_string(), "2".to_string());
//!
//! let resolved = ResolvedParameters::resolve(&[&name, &count], &raw)?;
//! assert_eq!(resolved.require(&name)?, "world");
//! assert_eq!(resolved.get(&count)?, Some(2));
//! # Ok::<(), termkit_params::ParameterError>(())
//! ```

pub mod error;
pub mod parameter;
pub mod resolve;
pub mod value;

pub use error::{ParameterError, ParameterResult};
pub use parameter::{Parameter, ParameterDescriptor, ParameterKind};
pub use resolve::ResolvedParameters;
pub use value::{ParameterValue, ValueType};
