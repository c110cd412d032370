// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

use log::warn;

use crate::{
    error::BuilderError,
    escape::{escape, escape_class_member, is_valid_group_name},
    flags::{Flag, Flags},
    fragment::{
        AnchorAssertionName, BackReference, BoundaryAssertionName, GroupKind, PresetCharSetName,
        Quantifier, SpecialCharName,
    },
    notifier::{ListenerId, Notifier},
    options::EngineOptions,
};

/// Assembles a regular expression one fragment at a time.
///
/// Every fragment method consumes the builder and returns it, so calls
/// can be chained:
///
/// ```
/// use regex_fluent::PatternBuilder;
///
/// let mut re = PatternBuilder::new()
///     .start_of_line()
///     .digit().exactly(3)
///     .literal("-")
///     .digit().exactly(4)
///     .end_of_line();
///
/// assert_eq!(re.to_string(), r"/^\d{3}-\d{4}$/g");
/// assert!(re.test("555-1234"));
/// ```
///
/// Invalid arguments do not stop the chain. They are reported to the
/// listeners registered with `add_listener`, recorded in `errors()`,
/// and the offending call leaves the pattern unchanged.
#[derive(Debug, Default)]
pub struct PatternBuilder {
    pub(crate) pattern: String,
    pub(crate) flags: Flags,
    pub(crate) result_cap: Option<usize>,
    pub(crate) options: EngineOptions,
    notifier: Notifier,
    errors: Vec<BuilderError>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose pattern is the concatenation of the patterns
    /// of `builders` (in order, without separator) and whose flags are the
    /// union of their flags.
    ///
    /// The result is not checked for being a meaningful expression.
    pub fn combine<'a, I>(builders: I) -> PatternBuilder
    where
        I: IntoIterator<Item = &'a PatternBuilder>,
    {
        let mut combined = PatternBuilder::new();
        for builder in builders {
            combined.pattern.push_str(&builder.pattern);
            combined.flags = combined.flags.union(&builder.flags);
        }
        combined
    }

    // Anchors, boundaries and preset char sets

    pub fn start_of_line(self) -> Self {
        self.append(AnchorAssertionName::Start)
    }

    pub fn end_of_line(self) -> Self {
        self.append(AnchorAssertionName::End)
    }

    pub fn digit(self) -> Self {
        self.append(PresetCharSetName::CharDigit)
    }

    pub fn non_digit(self) -> Self {
        self.append(PresetCharSetName::CharNotDigit)
    }

    pub fn word_character(self) -> Self {
        self.append(PresetCharSetName::CharWord)
    }

    pub fn non_word_character(self) -> Self {
        self.append(PresetCharSetName::CharNotWord)
    }

    pub fn whitespace(self) -> Self {
        self.append(PresetCharSetName::CharSpace)
    }

    pub fn non_whitespace(self) -> Self {
        self.append(PresetCharSetName::CharNotSpace)
    }

    pub fn word_boundary(self) -> Self {
        self.append(BoundaryAssertionName::IsBound)
    }

    pub fn non_word_boundary(self) -> Self {
        self.append(BoundaryAssertionName::IsNotBound)
    }

    pub fn any_character(self) -> Self {
        self.append(SpecialCharName::CharAny)
    }

    // Literals and char sets

    /// Appends `text` with all metacharacters escaped.
    pub fn literal(self, text: &str) -> Self {
        self.append(escape(text))
    }

    /// Appends `[from-to]`. The boundaries are NOT escaped, a malformed
    /// range is only detected when the pattern is compiled.
    pub fn range(self, from: &str, to: &str) -> Self {
        self.append(format!("[{}-{}]", from, to))
    }

    /// Appends `[^from-to]`, the boundaries are not escaped.
    pub fn not_in_range(self, from: &str, to: &str) -> Self {
        self.append(format!("[^{}-{}]", from, to))
    }

    /// Appends a class matching any one of `chars`. Metacharacters and set
    /// operators are taken literally, a lone `-` between two characters
    /// still forms a range.
    ///
    /// An empty `chars` yields `[]`, which the engine rejects, so compiling
    /// reports an invalid pattern and the result matches nothing.
    pub fn any_of(self, chars: &str) -> Self {
        self.append(format!("[{}]", escape_class_member(chars)))
    }

    /// Appends a class matching any character not in `chars`.
    /// As with `any_of`, an empty `chars` fails to compile.
    pub fn none_of(self, chars: &str) -> Self {
        self.append(format!("[^{}]", escape_class_member(chars)))
    }

    pub fn any_character_except(self, chars: &str) -> Self {
        self.append(format!("[^{}]", escape_class_member(chars)))
    }

    // Quantifiers

    pub fn exactly(self, n: i64) -> Self {
        match usize::try_from(n) {
            Ok(n) => self.append(Quantifier::Repeat(n)),
            Err(_) => self.invalid_argument("exactly expects a non-negative integer."),
        }
    }

    pub fn at_least(self, n: i64) -> Self {
        match usize::try_from(n) {
            Ok(n) => self.append(Quantifier::AtLeast(n)),
            Err(_) => self.invalid_argument("at_least expects a non-negative integer."),
        }
    }

    pub fn between(self, min: i64, max: i64) -> Self {
        match (usize::try_from(min), usize::try_from(max)) {
            (Ok(min), Ok(max)) if max >= min => self.append(Quantifier::RepeatRange(min, max)),
            _ => self.invalid_argument(
                "between expects non-negative integers where max is not less than min.",
            ),
        }
    }

    pub fn zero_or_more(self) -> Self {
        self.append(Quantifier::ZeroOrMore)
    }

    pub fn one_or_more(self) -> Self {
        self.append(Quantifier::OneOrMore)
    }

    pub fn zero_or_one(self) -> Self {
        self.append(Quantifier::Optional)
    }

    // Groups
    //
    // Each group method hands a fresh child builder to `build_group`,
    // wraps whatever the child accumulated and appends it. The child
    // is dropped afterwards, only its pattern text and its reported
    // errors are taken over.

    pub fn capture<F>(self, build_group: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        self.group(GroupKind::Capture, build_group)
    }

    /// Appends `(?<name>...)`. When `name` is not an identifier
    /// the failure is reported and nothing is appended.
    pub fn named_capture<F>(self, name: &str, build_group: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        if !is_valid_group_name(name) {
            return self.invalid_argument("named_capture expects a valid group name.");
        }
        self.group(GroupKind::NamedCapture(name.to_owned()), build_group)
    }

    pub fn non_capturing_group<F>(self, build_group: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        self.group(GroupKind::NonCapturing, build_group)
    }

    pub fn positive_lookahead<F>(self, build_group: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        self.group(GroupKind::IsBefore, build_group)
    }

    pub fn negative_lookahead<F>(self, build_group: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        self.group(GroupKind::IsNotBefore, build_group)
    }

    pub fn positive_lookbehind<F>(self, build_group: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        self.group(GroupKind::IsAfter, build_group)
    }

    pub fn negative_lookbehind<F>(self, build_group: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        self.group(GroupKind::IsNotAfter, build_group)
    }

    /// Appends a bare `|` to this very builder.
    ///
    /// Inside a group callback this builds the alternation inline,
    /// e.g. `capture(|g| g.literal("cat").or().literal("dog"))`
    /// yields `(cat|dog)`.
    pub fn or(self) -> Self {
        self.append("|")
    }

    /// Appends `|` followed by the fragment built by `build_branch`
    /// on a disposable child builder.
    pub fn or_with<F>(mut self, build_branch: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        let branch = build_branch(PatternBuilder::new());
        self.pattern.push('|');
        self.adopt(branch)
    }

    // Back references

    pub fn backreference(self, index: i64) -> Self {
        match usize::try_from(index) {
            Ok(index) if index >= 1 => self.append(BackReference::Index(index)),
            _ => self.invalid_argument("backreference expects a positive integer."),
        }
    }

    pub fn named_backreference(self, name: &str) -> Self {
        if is_valid_group_name(name) {
            self.append(BackReference::Name(name.to_owned()))
        } else {
            self.invalid_argument("named_backreference expects a valid group name.")
        }
    }

    // Flags

    pub fn ignore_case(self) -> Self {
        self.flag(Flag::IgnoreCase)
    }

    pub fn multiline(self) -> Self {
        self.flag(Flag::Multiline)
    }

    pub fn dot_all(self) -> Self {
        self.flag(Flag::DotAll)
    }

    pub fn unicode(self) -> Self {
        self.flag(Flag::Unicode)
    }

    // Execution settings

    /// Limits the number of matches `execute` collects.
    pub fn run_times(mut self, count: i64) -> Self {
        match usize::try_from(count) {
            Ok(count) if count >= 1 => {
                self.result_cap = Some(count);
                self
            }
            _ => self.invalid_argument("run_times expects a positive integer."),
        }
    }

    pub fn engine_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    // Listeners

    /// Registers a listener which is called with every failure
    /// reported by this builder from now on.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&BuilderError) + 'static,
    {
        self.notifier.subscribe(Box::new(listener))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // Inspection

    /// The raw pattern accumulated so far, without flags.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn result_cap(&self) -> Option<usize> {
        self.result_cap
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// All failures reported so far, oldest first.
    pub fn errors(&self) -> &[BuilderError] {
        &self.errors
    }

    pub(crate) fn report(&mut self, error: BuilderError) {
        warn!("{}", error);
        self.publish(error);
    }

    fn publish(&mut self, error: BuilderError) {
        self.notifier.publish(&error);
        self.errors.push(error);
    }

    fn append<T: Display>(mut self, fragment: T) -> Self {
        self.pattern.push_str(&fragment.to_string());
        self
    }

    fn flag(mut self, flag: Flag) -> Self {
        self.flags.insert(flag);
        self
    }

    fn invalid_argument(mut self, message: &str) -> Self {
        self.report(BuilderError::InvalidArgument(message.to_owned()));
        self
    }

    // Appends the pattern of the child and forwards the failures
    // the child has reported to the listeners of this builder.
    fn adopt(mut self, child: PatternBuilder) -> Self {
        let PatternBuilder {
            pattern, errors, ..
        } = child;

        for error in errors {
            self.publish(error);
        }

        self.pattern.push_str(&pattern);
        self
    }

    fn group<F>(self, kind: GroupKind, build_group: F) -> Self
    where
        F: FnOnce(PatternBuilder) -> PatternBuilder,
    {
        let mut child = build_group(PatternBuilder::new());
        child.pattern = kind.wrap(&child.pattern);
        self.adopt(child)
    }
}

impl Display for PatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use crate::{error::BuilderError, flags::Flag};

    use super::PatternBuilder;

    // Registers a listener that collects the messages of reported failures.
    fn listen(builder: &mut PatternBuilder) -> Rc<RefCell<Vec<String>>> {
        let messages = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&messages);
        builder.add_listener(move |e| sink.borrow_mut().push(e.message().to_owned()));
        messages
    }

    #[test]
    fn test_preset_fragments() {
        let b = PatternBuilder::new()
            .start_of_line()
            .digit()
            .non_digit()
            .word_character()
            .non_word_character()
            .whitespace()
            .non_whitespace()
            .word_boundary()
            .non_word_boundary()
            .any_character()
            .end_of_line();

        assert_eq!(b.pattern(), r"^\d\D\w\W\s\S\b\B.$");
    }

    #[test]
    fn test_literal() {
        assert_eq!(PatternBuilder::new().literal("abc").pattern(), "abc");
        assert_eq!(
            PatternBuilder::new().literal("(1+2)*3 = 9?").pattern(),
            r"\(1\+2\)\*3 = 9\?"
        );
        assert_eq!(PatternBuilder::new().literal("a-b").pattern(), "a-b");
    }

    #[test]
    fn test_char_sets() {
        assert_eq!(PatternBuilder::new().range("a", "z").pattern(), "[a-z]");
        assert_eq!(PatternBuilder::new().not_in_range("0", "9").pattern(), "[^0-9]");

        // boundaries are taken verbatim
        assert_eq!(PatternBuilder::new().range("]", "[").pattern(), "[]-[]");

        assert_eq!(PatternBuilder::new().any_of("abc").pattern(), "[abc]");
        assert_eq!(PatternBuilder::new().any_of(".$").pattern(), r"[\.\$]");
        assert_eq!(PatternBuilder::new().none_of("xyz").pattern(), "[^xyz]");
        assert_eq!(PatternBuilder::new().any_of("a&&b").pattern(), r"[a\&\&b]");
        assert_eq!(PatternBuilder::new().none_of("0-9").pattern(), "[^0-9]");
        assert_eq!(
            PatternBuilder::new().any_character_except("[]").pattern(),
            r"[^\[\]]"
        );
    }

    #[test]
    fn test_quantifiers() {
        let b = PatternBuilder::new()
            .digit()
            .exactly(3)
            .digit()
            .at_least(0)
            .digit()
            .between(2, 5)
            .digit()
            .between(4, 4)
            .word_character()
            .zero_or_more()
            .word_character()
            .one_or_more()
            .word_character()
            .zero_or_one();

        assert_eq!(b.pattern(), r"\d{3}\d{0,}\d{2,5}\d{4,4}\w*\w+\w?");
        assert!(b.errors().is_empty());
    }

    #[test]
    fn test_quantifiers_invalid() {
        let mut b = PatternBuilder::new().digit();
        let messages = listen(&mut b);

        let b = b.exactly(-1).at_least(-3).between(-1, 2).between(5, 2);
        assert_eq!(b.pattern(), r"\d");
        assert_eq!(
            *messages.borrow(),
            vec![
                "exactly expects a non-negative integer.".to_owned(),
                "at_least expects a non-negative integer.".to_owned(),
                "between expects non-negative integers where max is not less than min.".to_owned(),
                "between expects non-negative integers where max is not less than min.".to_owned(),
            ]
        );

        // the chain keeps working after a failure
        let b = b.exactly(2);
        assert_eq!(b.pattern(), r"\d{2}");
        assert_eq!(b.errors().len(), 4);
    }

    #[test]
    fn test_groups() {
        let b = PatternBuilder::new()
            .capture(|g| g.digit().one_or_more())
            .non_capturing_group(|g| g.literal("a").or().literal("b"))
            .named_capture("year", |g| g.digit().exactly(4));
        assert_eq!(b.pattern(), r"(\d+)(?:a|b)(?<year>\d{4})");

        let b = PatternBuilder::new()
            .positive_lookahead(|g| g.literal("x"))
            .negative_lookahead(|g| g.literal("y"))
            .positive_lookbehind(|g| g.literal("$"))
            .negative_lookbehind(|g| g.literal("-"));
        assert_eq!(b.pattern(), r"(?=x)(?!y)(?<=\$)(?<!-)");

        // nested
        let b = PatternBuilder::new().capture(|g| g.literal("a").capture(|g| g.literal("b")));
        assert_eq!(b.pattern(), "(a(b))");

        // empty group
        let b = PatternBuilder::new().capture(|g| g);
        assert_eq!(b.pattern(), "()");
    }

    #[test]
    fn test_named_capture_invalid() {
        let mut b = PatternBuilder::new().literal("a");
        let messages = listen(&mut b);

        let b = b.named_capture("1st", |g| g.digit());
        assert_eq!(b.pattern(), "a");
        assert_eq!(
            *messages.borrow(),
            vec!["named_capture expects a valid group name.".to_owned()]
        );
    }

    #[test]
    fn test_child_failures_are_forwarded() {
        let mut b = PatternBuilder::new();
        let messages = listen(&mut b);

        let b = b.capture(|g| g.digit().exactly(-2));
        assert_eq!(b.pattern(), r"(\d)");
        assert_eq!(
            *messages.borrow(),
            vec!["exactly expects a non-negative integer.".to_owned()]
        );
        assert_eq!(
            b.errors(),
            &[BuilderError::InvalidArgument(
                "exactly expects a non-negative integer.".to_owned()
            )]
        );
    }

    #[test]
    fn test_or() {
        // same builder
        let b = PatternBuilder::new().capture(|g| g.literal("cat").or().literal("dog"));
        assert_eq!(b.pattern(), "(cat|dog)");

        // disposable child
        let b = PatternBuilder::new()
            .literal("cat")
            .or_with(|g| g.literal("dog").zero_or_one());
        assert_eq!(b.pattern(), "cat|dog?");

        let b = PatternBuilder::new().literal("a").or();
        assert_eq!(b.pattern(), "a|");
    }

    #[test]
    fn test_backreference() {
        let mut b = PatternBuilder::new();
        let messages = listen(&mut b);

        let b = b
            .capture(|g| g.word_character().one_or_more())
            .whitespace()
            .backreference(1)
            .backreference(0)
            .backreference(-1)
            .named_backreference("word")
            .named_backreference("bad name");

        assert_eq!(b.pattern(), r"(\w+)\s\1\k<word>");
        assert_eq!(
            *messages.borrow(),
            vec![
                "backreference expects a positive integer.".to_owned(),
                "backreference expects a positive integer.".to_owned(),
                "named_backreference expects a valid group name.".to_owned(),
            ]
        );
    }

    #[test]
    fn test_flags() {
        let b = PatternBuilder::new();
        assert!(b.flags().contains(Flag::Global));
        assert_eq!(b.flags().to_string(), "g");

        let b = b.ignore_case().multiline().ignore_case().multiline();
        assert_eq!(b.flags().to_string(), "gim");

        let b = b.unicode().dot_all();
        assert_eq!(b.flags().to_string(), "gimsu");
    }

    #[test]
    fn test_run_times() {
        let b = PatternBuilder::new().run_times(5);
        assert_eq!(b.result_cap(), Some(5));

        let mut b = PatternBuilder::new();
        let messages = listen(&mut b);

        let b = b.run_times(-1).run_times(0);
        assert_eq!(b.result_cap(), None);
        assert_eq!(
            *messages.borrow(),
            vec![
                "run_times expects a positive integer.".to_owned(),
                "run_times expects a positive integer.".to_owned(),
            ]
        );

        // an invalid count keeps the previous cap
        let b = PatternBuilder::new().run_times(2).run_times(-5);
        assert_eq!(b.result_cap(), Some(2));
    }

    #[test]
    fn test_remove_listener() {
        let mut b = PatternBuilder::new();
        let messages = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&messages);
        let id = b.add_listener(move |e| sink.borrow_mut().push(e.message().to_owned()));

        let mut b = b.exactly(-1);
        assert_eq!(messages.borrow().len(), 1);

        assert!(b.remove_listener(id));
        assert!(!b.remove_listener(id));

        let b = b.exactly(-1);
        assert_eq!(messages.borrow().len(), 1);

        // still recorded
        assert_eq!(b.errors().len(), 2);
    }

    #[test]
    fn test_display() {
        let b = PatternBuilder::new()
            .start_of_line()
            .digit()
            .exactly(3)
            .literal("-")
            .digit()
            .exactly(3)
            .literal("-")
            .digit()
            .exactly(4)
            .end_of_line();
        assert_eq!(b.to_string(), r"/^\d{3}-\d{3}-\d{4}$/g");

        let b = PatternBuilder::new().literal("a").multiline().ignore_case();
        assert_eq!(b.to_string(), "/a/gim");

        assert_eq!(PatternBuilder::new().to_string(), "//g");
    }

    #[test]
    fn test_combine() {
        let a = PatternBuilder::new().literal("foo").ignore_case();
        let b = PatternBuilder::new().literal("bar").multiline().run_times(3);

        let c = PatternBuilder::combine([&a, &b]);
        assert_eq!(c.pattern(), "foobar");
        assert_eq!(c.flags().to_string(), "gim");
        assert_eq!(c.result_cap(), None);

        // the arguments are left as they were
        assert_eq!(a.pattern(), "foo");
        assert_eq!(b.pattern(), "bar");

        let c = PatternBuilder::combine([&b, &a, &b]);
        assert_eq!(c.pattern(), "barfoobar");

        let empty: [&PatternBuilder; 0] = [];
        let c = PatternBuilder::combine(empty);
        assert_eq!(c.to_string(), "//g");
    }
}
