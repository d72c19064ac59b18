//! The canonical Robot Framework translation schema.
//!
//! Crowdin exports key every translated value by a fixed, framework-defined
//! name ("Suite Setup", "Test Cases", ...). These enums give that schema a
//! static shape: each variant knows both its canonical key in the YAML
//! export and the attribute name it becomes in the generated `Language`
//! class. Validation walks the full schema once at load time, so a missing
//! key fails before anything is rendered.

use std::fmt::{Display, Formatter};

/// A canonical setting recognized by Robot Framework.
///
/// The translated values come from the merged `Settings`/`Setup`/`Keywords`
/// sections of the export. Each renders as a single quoted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Library,
    Resource,
    Variable,
    Documentation,
    Metadata,
    SuiteSetup,
    SuiteTeardown,
    TestSetup,
    TestTeardown,
    TestTemplate,
    TestTimeout,
    TestTags,
    TaskSetup,
    TaskTeardown,
    TaskTemplate,
    TaskTimeout,
    TaskTags,
    KeywordTags,
    Tags,
    Setup,
    Teardown,
    Template,
    Timeout,
    Arguments,
}

impl SettingField {
    /// All setting fields, in generated-attribute order.
    ///
    /// Must list the variants in declaration order: `LanguageDef` stores
    /// resolved values in this order and indexes them by discriminant.
    pub const ALL: [SettingField; 24] = [
        SettingField::Library,
        SettingField::Resource,
        SettingField::Variable,
        SettingField::Documentation,
        SettingField::Metadata,
        SettingField::SuiteSetup,
        SettingField::SuiteTeardown,
        SettingField::TestSetup,
        SettingField::TestTeardown,
        SettingField::TestTemplate,
        SettingField::TestTimeout,
        SettingField::TestTags,
        SettingField::TaskSetup,
        SettingField::TaskTeardown,
        SettingField::TaskTemplate,
        SettingField::TaskTimeout,
        SettingField::TaskTags,
        SettingField::KeywordTags,
        SettingField::Tags,
        SettingField::Setup,
        SettingField::Teardown,
        SettingField::Template,
        SettingField::Timeout,
        SettingField::Arguments,
    ];

    /// The key this setting has in the YAML export.
    pub fn canonical_key(self) -> &'static str {
        match self {
            SettingField::Library => "Library",
            SettingField::Resource => "Resource",
            SettingField::Variable => "Variable",
            SettingField::Documentation => "Documentation",
            SettingField::Metadata => "Metadata",
            SettingField::SuiteSetup => "Suite Setup",
            SettingField::SuiteTeardown => "Suite Teardown",
            SettingField::TestSetup => "Test Setup",
            SettingField::TestTeardown => "Test Teardown",
            SettingField::TestTemplate => "Test Template",
            SettingField::TestTimeout => "Test Timeout",
            SettingField::TestTags => "Test Tags",
            SettingField::TaskSetup => "Task Setup",
            SettingField::TaskTeardown => "Task Teardown",
            SettingField::TaskTemplate => "Task Template",
            SettingField::TaskTimeout => "Task Timeout",
            SettingField::TaskTags => "Task Tags",
            SettingField::KeywordTags => "Keyword Tags",
            SettingField::Tags => "Tags",
            SettingField::Setup => "Setup",
            SettingField::Teardown => "Teardown",
            SettingField::Template => "Template",
            SettingField::Timeout => "Timeout",
            SettingField::Arguments => "Arguments",
        }
    }

    /// The attribute name in the generated `Language` class.
    pub fn attribute(self) -> &'static str {
        match self {
            SettingField::Library => "library",
            SettingField::Resource => "resource",
            SettingField::Variable => "variables",
            SettingField::Documentation => "documentation",
            SettingField::Metadata => "metadata",
            SettingField::SuiteSetup => "suite_setup",
            SettingField::SuiteTeardown => "suite_teardown",
            SettingField::TestSetup => "test_setup",
            SettingField::TestTeardown => "test_teardown",
            SettingField::TestTemplate => "test_template",
            SettingField::TestTimeout => "test_timeout",
            SettingField::TestTags => "test_tags",
            SettingField::TaskSetup => "task_setup",
            SettingField::TaskTeardown => "task_teardown",
            SettingField::TaskTemplate => "task_template",
            SettingField::TaskTimeout => "task_timeout",
            SettingField::TaskTags => "task_tags",
            SettingField::KeywordTags => "keyword_tags",
            SettingField::Tags => "tags",
            SettingField::Setup => "setup",
            SettingField::Teardown => "teardown",
            SettingField::Template => "template",
            SettingField::Timeout => "timeout",
            SettingField::Arguments => "arguments",
        }
    }
}

impl Display for SettingField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_key())
    }
}

/// A structural section header group of the Robot Framework file format.
///
/// Each group has exactly one translated header string in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderGroup {
    Settings,
    Variable,
    TestCases,
    Tasks,
    Keywords,
    Comments,
}

impl HeaderGroup {
    /// All header groups, in generated-attribute order.
    ///
    /// Must list the variants in declaration order: `LanguageDef` stores
    /// resolved values in this order and indexes them by discriminant.
    pub const ALL: [HeaderGroup; 6] = [
        HeaderGroup::Settings,
        HeaderGroup::Variable,
        HeaderGroup::TestCases,
        HeaderGroup::Tasks,
        HeaderGroup::Keywords,
        HeaderGroup::Comments,
    ];

    /// The key this group has in the `Headers` section of the export.
    pub fn canonical_key(self) -> &'static str {
        match self {
            HeaderGroup::Settings => "Settings",
            HeaderGroup::Variable => "Variable",
            HeaderGroup::TestCases => "Test Cases",
            HeaderGroup::Tasks => "Tasks",
            HeaderGroup::Keywords => "Keywords",
            HeaderGroup::Comments => "Comments",
        }
    }

    /// The attribute name in the generated `Language` class.
    pub fn attribute(self) -> &'static str {
        match self {
            HeaderGroup::Settings => "settings_header",
            HeaderGroup::Variable => "variables_header",
            HeaderGroup::TestCases => "test_cases_header",
            HeaderGroup::Tasks => "tasks_header",
            HeaderGroup::Keywords => "keywords_header",
            HeaderGroup::Comments => "comments_header",
        }
    }
}

impl Display for HeaderGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_key())
    }
}

/// A BDD prefix word (Given/When/Then/And/But).
///
/// Each renders as a one-element list in the generated class, matching the
/// `*_prefixes` attributes of `robot.conf.Language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BddPrefix {
    Given,
    When,
    Then,
    And,
    But,
}

impl BddPrefix {
    /// All BDD prefixes, in generated-attribute order.
    ///
    /// Must list the variants in declaration order: `LanguageDef` stores
    /// resolved values in this order and indexes them by discriminant.
    pub const ALL: [BddPrefix; 5] = [
        BddPrefix::Given,
        BddPrefix::When,
        BddPrefix::Then,
        BddPrefix::And,
        BddPrefix::But,
    ];

    /// The key this prefix has in the `BDD` section of the export.
    pub fn canonical_key(self) -> &'static str {
        match self {
            BddPrefix::Given => "Given",
            BddPrefix::When => "When",
            BddPrefix::Then => "Then",
            BddPrefix::And => "And",
            BddPrefix::But => "But",
        }
    }

    /// The attribute name in the generated `Language` class.
    pub fn attribute(self) -> &'static str {
        match self {
            BddPrefix::Given => "given_prefixes",
            BddPrefix::When => "when_prefixes",
            BddPrefix::Then => "then_prefixes",
            BddPrefix::And => "and_prefixes",
            BddPrefix::But => "but_prefixes",
        }
    }
}

impl Display for BddPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_key())
    }
}
