//! Parameter declarations and their type-erased descriptor view.

use std::fmt;
use std::marker::PhantomData;

use crate::value::{ParameterValue, ValueType};

/// Whether a parameter is a positional argument or a named option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// A positional argument. Required by resolution.
    Argument,
    /// A named option. Optional by resolution.
    Option,
}

impl ParameterKind {
    /// Whether resolution must find a value for this kind.
    pub fn is_required(self) -> bool {
        matches!(self, ParameterKind::Argument)
    }
}

/// The type-erased, read-only view of one declared parameter.
///
/// Help rendering walks descriptors uniformly regardless of their value
/// types; resolution uses the [`ValueType`] tag to decode raw text. All
/// accessors are pure and safe to call at any time after declaration.
pub trait ParameterDescriptor: Send + Sync {
    /// The parameter's name. Re-evaluated on every call.
    fn name(&self) -> String;

    /// Optional help text. Re-evaluated on every call.
    fn help(&self) -> Option<String>;

    /// Tag of the concrete type raw text decodes to.
    fn value_type(&self) -> ValueType;

    /// Argument or option.
    fn kind(&self) -> ParameterKind;

    /// Whether resolution fails when no raw value carries this name.
    fn is_required(&self) -> bool {
        self.kind().is_required()
    }
}

type TextProducer = Box<dyn Fn() -> String + Send + Sync>;

/// A strongly-typed parameter declaration.
///
/// The name and help text are stored as deferred producers, re-invoked on
/// every read and never cached, so either string may depend on state that
/// settles only after the declaration is created (localization, dynamic
/// registration). Fixed strings go through the `_named` and `_text`
/// conveniences.
///
/// ```
/// use termkit_params::{Parameter, ParameterDescriptor};
///
/// let count = Parameter::<i64>::argument_named("count")
///     .with_help_text("How many times to repeat");
/// assert_eq!(count.name(), "count");
/// assert!(count.is_required());
/// ```
pub struct Parameter<T: ParameterValue> {
    kind: ParameterKind,
    name: TextProducer,
    help: Option<TextProducer>,
    marker: PhantomData<fn() -> T>,
}

impl<T: ParameterValue> Parameter<T> {
    /// Declares a required positional argument with a deferred name.
    pub fn argument(name: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::new(ParameterKind::Argument, name)
    }

    /// Declares an optional named option with a deferred name.
    pub fn option(name: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::new(ParameterKind::Option, name)
    }

    /// Declares a required positional argument with a fixed name.
    pub fn argument_named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::argument(move || name.clone())
    }

    /// Declares an optional named option with a fixed name.
    pub fn option_named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::option(move || name.clone())
    }

    fn new(kind: ParameterKind, name: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            kind,
            name: Box::new(name),
            help: None,
            marker: PhantomData,
        }
    }

    /// Attaches a deferred help producer.
    pub fn with_help(mut self, help: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.help = Some(Box::new(help));
        self
    }

    /// Attaches fixed help text.
    pub fn with_help_text(self, help: impl Into<String>) -> Self {
        let help = help.into();
        self.with_help(move || help.clone())
    }
}

impl<T: ParameterValue> ParameterDescriptor for Parameter<T> {
    fn name(&self) -> String {
        (self.name)()
    }

    fn help(&self) -> Option<String> {
        self.help.as_ref().map(|producer| producer())
    }

    fn value_type(&self) -> ValueType {
        ValueType::of::<T>()
    }

    fn kind(&self) -> ParameterKind {
        self.kind
    }
}

impl<T: ParameterValue> fmt::Debug for Parameter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("kind", &self.kind)
            .field("name", &(self.name)())
            .field("type", &T::TYPE_NAME)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_kind_implies_requiredness() {
        assert!(ParameterKind::Argument.is_required());
        assert!(!ParameterKind::Option.is_required());

        let argument = Parameter::<String>::argument_named("source");
        let option = Parameter::<String>::option_named("verbose");
        assert!(argument.is_required());
        assert!(!option.is_required());
    }

    #[test]
    fn test_producers_are_reinvoked_on_every_read() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let parameter = Parameter::<i64>::argument(move || {
            let call = counter.fetch_add(1, Ordering::SeqCst);
            format!("name-{call}")
        });

        assert_eq!(parameter.name(), "name-0");
        assert_eq!(parameter.name(), "name-1");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_help_producer_is_not_cached_either() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let parameter = Parameter::<i64>::argument_named("count")
            .with_help(move || format!("read {}", counter.fetch_add(1, Ordering::SeqCst)));

        assert_eq!(parameter.help().as_deref(), Some("read 0"));
        assert_eq!(parameter.help().as_deref(), Some("read 1"));
    }

    #[test]
    fn test_help_is_absent_until_attached() {
        let bare = Parameter::<bool>::option_named("force");
        assert_eq!(bare.help(), None);

        let documented = Parameter::<bool>::option_named("force")
            .with_help_text("Skip confirmation prompts");
        assert_eq!(documented.help().as_deref(), Some("Skip confirmation prompts"));
    }

    #[test]
    fn test_erased_view_preserves_declared_type() {
        let count = Parameter::<u32>::argument_named("count");
        let descriptor: &dyn ParameterDescriptor = &count;

        assert_eq!(descriptor.name(), "count");
        assert_eq!(descriptor.kind(), ParameterKind::Argument);
        assert!(descriptor.value_type().is::<u32>());
        assert_eq!(descriptor.value_type().name(), "u32");
    }

    #[test]
    fn test_descriptors_of_mixed_types_share_a_slice() {
        let name = Parameter::<String>::argument_named("name");
        let count = Parameter::<i64>::option_named("count");
        let force = Parameter::<bool>::option_named("force");
        let descriptors: Vec<&dyn ParameterDescriptor> = vec![&name, &count, &force];

        let names: Vec<_> = descriptors.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["name", "count", "force"]);
    }
}
