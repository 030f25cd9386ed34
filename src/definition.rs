//! Tuple kinds and their static definitions
//!
//! [`TupleKind`] enumerates every row shape in the catalog. Each kind maps
//! to exactly one process-wide [`TupleDefinition`]: the ordered field list
//! an external binder (and the generated wrappers) depend on. The mapping
//! is a static lookup, created once, immutable, safely shared.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TupleError;
use crate::field::FieldDefinition;
use crate::tuples;

/// Every tuple kind in the catalog
///
/// Serialized as the kind name string (e.g. `"Component"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TupleKind {
    // Components, files, and layout
    Component,
    Directory,
    Feature,
    FeatureComponents,
    File,
    Media,
    Property,
    Binary,
    Icon,
    CreateFolder,
    DuplicateFile,
    MoveFile,
    RemoveFile,
    RemoveFolder,
    ReserveCost,
    Shortcut,
    Environment,
    Condition,
    LaunchCondition,
    Upgrade,
    // Registry and system search
    Registry,
    RemoveRegistry,
    RegLocator,
    CompLocator,
    IniLocator,
    DrLocator,
    Signature,
    AppSearch,
    IniFile,
    // Dialogs and controls
    Dialog,
    Control,
    ControlEvent,
    ControlCondition,
    EventMapping,
    CheckBox,
    ComboBox,
    ListBox,
    ListView,
    RadioButton,
    TextStyle,
    UIText,
    ActionText,
    Billboard,
    Error,
    // Actions and services
    CustomAction,
    ServiceControl,
    ServiceInstall,
    SelfReg,
    OdbcDataSource,
    OdbcDriver,
    // COM registration and advertising
    Class,
    ProgId,
    Extension,
    Verb,
    Mime,
    TypeLib,
    AppId,
    Assembly,
    Font,
    // Toolchain-internal rows, consumed by the linker and never emitted
    WixAction,
    WixComplexReference,
    WixSimpleReference,
    WixVariable,
    WixProperty,
    WixSuppressAction,
    WixOrdering,
    WixEnsureTable,
}

impl TupleKind {
    /// All kinds, in catalog order
    pub const ALL: &'static [TupleKind] = &[
        TupleKind::Component,
        TupleKind::Directory,
        TupleKind::Feature,
        TupleKind::FeatureComponents,
        TupleKind::File,
        TupleKind::Media,
        TupleKind::Property,
        TupleKind::Binary,
        TupleKind::Icon,
        TupleKind::CreateFolder,
        TupleKind::DuplicateFile,
        TupleKind::MoveFile,
        TupleKind::RemoveFile,
        TupleKind::RemoveFolder,
        TupleKind::ReserveCost,
        TupleKind::Shortcut,
        TupleKind::Environment,
        TupleKind::Condition,
        TupleKind::LaunchCondition,
        TupleKind::Upgrade,
        TupleKind::Registry,
        TupleKind::RemoveRegistry,
        TupleKind::RegLocator,
        TupleKind::CompLocator,
        TupleKind::IniLocator,
        TupleKind::DrLocator,
        TupleKind::Signature,
        TupleKind::AppSearch,
        TupleKind::IniFile,
        TupleKind::Dialog,
        TupleKind::Control,
        TupleKind::ControlEvent,
        TupleKind::ControlCondition,
        TupleKind::EventMapping,
        TupleKind::CheckBox,
        TupleKind::ComboBox,
        TupleKind::ListBox,
        TupleKind::ListView,
        TupleKind::RadioButton,
        TupleKind::TextStyle,
        TupleKind::UIText,
        TupleKind::ActionText,
        TupleKind::Billboard,
        TupleKind::Error,
        TupleKind::CustomAction,
        TupleKind::ServiceControl,
        TupleKind::ServiceInstall,
        TupleKind::SelfReg,
        TupleKind::OdbcDataSource,
        TupleKind::OdbcDriver,
        TupleKind::Class,
        TupleKind::ProgId,
        TupleKind::Extension,
        TupleKind::Verb,
        TupleKind::Mime,
        TupleKind::TypeLib,
        TupleKind::AppId,
        TupleKind::Assembly,
        TupleKind::Font,
        TupleKind::WixAction,
        TupleKind::WixComplexReference,
        TupleKind::WixSimpleReference,
        TupleKind::WixVariable,
        TupleKind::WixProperty,
        TupleKind::WixSuppressAction,
        TupleKind::WixOrdering,
        TupleKind::WixEnsureTable,
    ];

    /// The kind name (e.g. `"FeatureComponents"`)
    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    /// The static field-definition list for this kind
    pub fn definition(&self) -> &'static TupleDefinition {
        TupleDefinition::of(*self)
    }

    /// Closest kinds to a possibly misspelled name, best match first
    ///
    /// Backs the "did you mean" hint on failed name lookups. Returns at
    /// most three kinds, empty when nothing scores.
    pub fn suggest(input: &str) -> Vec<TupleKind> {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, TupleKind)> = TupleKind::ALL
            .iter()
            .filter_map(|kind| {
                matcher
                    .fuzzy_match(kind.name(), input)
                    .map(|score| (score, *kind))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(3).map(|(_, kind)| kind).collect()
    }
}

impl fmt::Display for TupleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TupleKind {
    type Err = TupleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TupleKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| TupleError::UnknownTupleKind(s.to_string()))
    }
}

/// Static descriptor of one tuple kind: its name and ordered field list
///
/// Field order matches the kind's generated field-index enum; the two are
/// emitted from the same declaration, so they cannot drift.
#[derive(Debug, Serialize)]
pub struct TupleDefinition {
    /// Kind this definition describes
    pub kind: TupleKind,
    /// Kind name, as serialized
    pub name: &'static str,
    /// Ordered field metadata
    pub fields: &'static [FieldDefinition],
}

impl TupleDefinition {
    /// Static lookup: kind to definition
    pub fn of(kind: TupleKind) -> &'static TupleDefinition {
        match kind {
            TupleKind::Component => &tuples::core::COMPONENT,
            TupleKind::Directory => &tuples::core::DIRECTORY,
            TupleKind::Feature => &tuples::core::FEATURE,
            TupleKind::FeatureComponents => &tuples::core::FEATURE_COMPONENTS,
            TupleKind::File => &tuples::core::FILE,
            TupleKind::Media => &tuples::core::MEDIA,
            TupleKind::Property => &tuples::core::PROPERTY,
            TupleKind::Binary => &tuples::core::BINARY,
            TupleKind::Icon => &tuples::core::ICON,
            TupleKind::CreateFolder => &tuples::core::CREATE_FOLDER,
            TupleKind::DuplicateFile => &tuples::core::DUPLICATE_FILE,
            TupleKind::MoveFile => &tuples::core::MOVE_FILE,
            TupleKind::RemoveFile => &tuples::core::REMOVE_FILE,
            TupleKind::RemoveFolder => &tuples::core::REMOVE_FOLDER,
            TupleKind::ReserveCost => &tuples::core::RESERVE_COST,
            TupleKind::Shortcut => &tuples::core::SHORTCUT,
            TupleKind::Environment => &tuples::core::ENVIRONMENT,
            TupleKind::Condition => &tuples::core::CONDITION,
            TupleKind::LaunchCondition => &tuples::core::LAUNCH_CONDITION,
            TupleKind::Upgrade => &tuples::core::UPGRADE,
            TupleKind::Registry => &tuples::registry::REGISTRY,
            TupleKind::RemoveRegistry => &tuples::registry::REMOVE_REGISTRY,
            TupleKind::RegLocator => &tuples::registry::REG_LOCATOR,
            TupleKind::CompLocator => &tuples::registry::COMP_LOCATOR,
            TupleKind::IniLocator => &tuples::registry::INI_LOCATOR,
            TupleKind::DrLocator => &tuples::registry::DR_LOCATOR,
            TupleKind::Signature => &tuples::registry::SIGNATURE,
            TupleKind::AppSearch => &tuples::registry::APP_SEARCH,
            TupleKind::IniFile => &tuples::registry::INI_FILE,
            TupleKind::Dialog => &tuples::ui::DIALOG,
            TupleKind::Control => &tuples::ui::CONTROL,
            TupleKind::ControlEvent => &tuples::ui::CONTROL_EVENT,
            TupleKind::ControlCondition => &tuples::ui::CONTROL_CONDITION,
            TupleKind::EventMapping => &tuples::ui::EVENT_MAPPING,
            TupleKind::CheckBox => &tuples::ui::CHECK_BOX,
            TupleKind::ComboBox => &tuples::ui::COMBO_BOX,
            TupleKind::ListBox => &tuples::ui::LIST_BOX,
            TupleKind::ListView => &tuples::ui::LIST_VIEW,
            TupleKind::RadioButton => &tuples::ui::RADIO_BUTTON,
            TupleKind::TextStyle => &tuples::ui::TEXT_STYLE,
            TupleKind::UIText => &tuples::ui::UI_TEXT,
            TupleKind::ActionText => &tuples::ui::ACTION_TEXT,
            TupleKind::Billboard => &tuples::ui::BILLBOARD,
            TupleKind::Error => &tuples::ui::ERROR,
            TupleKind::CustomAction => &tuples::actions::CUSTOM_ACTION,
            TupleKind::ServiceControl => &tuples::actions::SERVICE_CONTROL,
            TupleKind::ServiceInstall => &tuples::actions::SERVICE_INSTALL,
            TupleKind::SelfReg => &tuples::actions::SELF_REG,
            TupleKind::OdbcDataSource => &tuples::actions::ODBC_DATA_SOURCE,
            TupleKind::OdbcDriver => &tuples::actions::ODBC_DRIVER,
            TupleKind::Class => &tuples::com::CLASS,
            TupleKind::ProgId => &tuples::com::PROG_ID,
            TupleKind::Extension => &tuples::com::EXTENSION,
            TupleKind::Verb => &tuples::com::VERB,
            TupleKind::Mime => &tuples::com::MIME,
            TupleKind::TypeLib => &tuples::com::TYPE_LIB,
            TupleKind::AppId => &tuples::com::APP_ID,
            TupleKind::Assembly => &tuples::com::ASSEMBLY,
            TupleKind::Font => &tuples::com::FONT,
            TupleKind::WixAction => &tuples::wix::WIX_ACTION,
            TupleKind::WixComplexReference => &tuples::wix::WIX_COMPLEX_REFERENCE,
            TupleKind::WixSimpleReference => &tuples::wix::WIX_SIMPLE_REFERENCE,
            TupleKind::WixVariable => &tuples::wix::WIX_VARIABLE,
            TupleKind::WixProperty => &tuples::wix::WIX_PROPERTY,
            TupleKind::WixSuppressAction => &tuples::wix::WIX_SUPPRESS_ACTION,
            TupleKind::WixOrdering => &tuples::wix::WIX_ORDERING,
            TupleKind::WixEnsureTable => &tuples::wix::WIX_ENSURE_TABLE,
        }
    }

    /// Look a definition up by kind name
    pub fn by_name(name: &str) -> Option<&'static TupleDefinition> {
        name.parse::<TupleKind>().ok().map(TupleDefinition::of)
    }

    /// Find a field's ordinal by column name
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}
