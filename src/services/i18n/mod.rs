//! Label resolution for weekday, month and view names.
//!
//! Lookups go through three levels, in order:
//! 1. the host's [`Translator`], if one is supplied,
//! 2. the built-in table for the requested locale,
//! 3. the built-in English table.
//!
//! A host answer counts as a miss when it is absent, echoes the namespaced
//! key back, or has the wrong shape for the label being asked for. Misses are
//! never reported as errors.

pub mod builtin;

use builtin::BuiltinLabels;

use crate::models::ui::ViewType;

/// Namespace prepended to every key handed to a host translator.
pub const KEY_NAMESPACE: &str = "calendar";

/// Value returned by a host translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Text(String),
    List(Vec<String>),
}

/// Host-supplied translation lookup.
#[cfg_attr(test, mockall::automock)]
pub trait Translator: Send + Sync {
    /// Look up `key` (e.g. `calendar.months`) for `locale`.
    fn translate(&self, locale: &str, key: &str) -> Option<TranslationValue>;
}

impl<F> Translator for F
where
    F: Fn(&str, &str) -> Option<TranslationValue> + Send + Sync,
{
    fn translate(&self, locale: &str, key: &str) -> Option<TranslationValue> {
        self(locale, key)
    }
}

/// Label lists, with the number of entries a valid answer must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Weekdays,
    WeekdaysFull,
    Months,
    MonthsShort,
}

impl ListKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKey::Weekdays => "weekdays",
            ListKey::WeekdaysFull => "weekdaysFull",
            ListKey::Months => "months",
            ListKey::MonthsShort => "monthsShort",
        }
    }

    pub fn expected_len(&self) -> usize {
        match self {
            ListKey::Weekdays | ListKey::WeekdaysFull => 7,
            ListKey::Months | ListKey::MonthsShort => 12,
        }
    }

    fn builtin(&self, table: &'static BuiltinLabels) -> Vec<String> {
        let values: &[&str] = match self {
            ListKey::Weekdays => &table.weekdays,
            ListKey::WeekdaysFull => &table.weekdays_full,
            ListKey::Months => &table.months,
            ListKey::MonthsShort => &table.months_short,
        };
        values.iter().map(|s| s.to_string()).collect()
    }
}

/// Single-string labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Today,
    Week,
    Day,
    Month,
    Year,
    Previous,
    Next,
    AllDay,
}

impl TextKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextKey::Today => "today",
            TextKey::Week => "week",
            TextKey::Day => "day",
            TextKey::Month => "month",
            TextKey::Year => "year",
            TextKey::Previous => "previous",
            TextKey::Next => "next",
            TextKey::AllDay => "allDay",
        }
    }

    fn builtin(&self, table: &'static BuiltinLabels) -> &'static str {
        match self {
            TextKey::Today => table.today,
            TextKey::Week => table.week,
            TextKey::Day => table.day,
            TextKey::Month => table.month,
            TextKey::Year => table.year,
            TextKey::Previous => table.previous,
            TextKey::Next => table.next,
            TextKey::AllDay => table.all_day,
        }
    }
}

impl From<ViewType> for TextKey {
    fn from(view: ViewType) -> Self {
        match view {
            ViewType::Month => TextKey::Month,
            ViewType::Week => TextKey::Week,
            ViewType::Day => TextKey::Day,
            ViewType::Year => TextKey::Year,
        }
    }
}

fn namespaced(key: &str) -> String {
    format!("{}.{}", KEY_NAMESPACE, key)
}

/// Resolves labels for one locale, consulting an optional host translator.
#[derive(Clone, Copy)]
pub struct LabelResolver<'a> {
    translator: Option<&'a dyn Translator>,
    locale: &'a str,
}

impl<'a> LabelResolver<'a> {
    pub fn new(locale: &'a str, translator: Option<&'a dyn Translator>) -> Self {
        Self { translator, locale }
    }

    /// Resolver backed by the built-in tables only.
    pub fn builtin(locale: &'a str) -> Self {
        Self::new(locale, None)
    }

    pub fn locale(&self) -> &str {
        self.locale
    }

    pub fn list(&self, key: ListKey) -> Vec<String> {
        if let Some(values) = self.host_list(key) {
            return values;
        }
        key.builtin(builtin::for_locale(self.locale))
    }

    pub fn text(&self, key: TextKey) -> String {
        if let Some(value) = self.host_text(key) {
            return value;
        }
        key.builtin(builtin::for_locale(self.locale)).to_string()
    }

    /// Short weekday names starting at `week_starts_on` (0 = Sunday).
    pub fn weekday_labels(&self, week_starts_on: u8) -> Vec<String> {
        let mut labels = self.list(ListKey::Weekdays);
        labels.rotate_left(week_starts_on as usize % 7);
        labels
    }

    /// Full weekday names starting at `week_starts_on`.
    pub fn weekday_full_labels(&self, week_starts_on: u8) -> Vec<String> {
        let mut labels = self.list(ListKey::WeekdaysFull);
        labels.rotate_left(week_starts_on as usize % 7);
        labels
    }

    /// Full name of `month` (1 = January).
    pub fn month_name(&self, month: u32) -> String {
        pick_month(self.list(ListKey::Months), month)
    }

    /// Short name of `month` (1 = January).
    pub fn month_short_name(&self, month: u32) -> String {
        pick_month(self.list(ListKey::MonthsShort), month)
    }

    pub fn year_label(&self, year: i32) -> String {
        year.to_string()
    }

    pub fn view_label(&self, view: ViewType) -> String {
        self.text(view.into())
    }

    fn host_list(&self, key: ListKey) -> Option<Vec<String>> {
        let full_key = namespaced(key.as_str());
        match self.translator?.translate(self.locale, &full_key)? {
            TranslationValue::List(values) if values.len() == key.expected_len() => Some(values),
            TranslationValue::Text(echo) if echo == full_key => None,
            other => {
                log::debug!(
                    "Ignoring translation for {} ({}): unexpected value {:?}",
                    full_key,
                    self.locale,
                    other
                );
                None
            }
        }
    }

    fn host_text(&self, key: TextKey) -> Option<String> {
        let full_key = namespaced(key.as_str());
        match self.translator?.translate(self.locale, &full_key)? {
            TranslationValue::Text(value) if value != full_key => Some(value),
            TranslationValue::Text(_) => None,
            other => {
                log::debug!(
                    "Ignoring translation for {} ({}): unexpected value {:?}",
                    full_key,
                    self.locale,
                    other
                );
                None
            }
        }
    }
}

fn pick_month(names: Vec<String>, month: u32) -> String {
    let index = (month.clamp(1, 12) - 1) as usize;
    names.into_iter().nth(index).unwrap_or_default()
}
