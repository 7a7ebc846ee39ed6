//! Built-in English and Spanish calendar labels.

pub struct BuiltinLabels {
    pub weekdays: [&'static str; 7],
    pub weekdays_full: [&'static str; 7],
    pub months: [&'static str; 12],
    pub months_short: [&'static str; 12],
    pub today: &'static str,
    pub week: &'static str,
    pub day: &'static str,
    pub month: &'static str,
    pub year: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub all_day: &'static str,
}

pub const DEFAULT_LOCALE: &str = "en";

pub static ENGLISH: BuiltinLabels = BuiltinLabels {
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    weekdays_full: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    today: "Today",
    week: "Week",
    day: "Day",
    month: "Month",
    year: "Year",
    previous: "Previous",
    next: "Next",
    all_day: "All day",
};

pub static SPANISH: BuiltinLabels = BuiltinLabels {
    weekdays: ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"],
    weekdays_full: [
        "Domingo",
        "Lunes",
        "Martes",
        "Miércoles",
        "Jueves",
        "Viernes",
        "Sábado",
    ],
    months: [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ],
    months_short: [
        "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
    ],
    today: "Hoy",
    week: "Semana",
    day: "Día",
    month: "Mes",
    year: "Año",
    previous: "Anterior",
    next: "Siguiente",
    all_day: "Todo el día",
};

/// Table for `locale`, if one is built in.
pub fn lookup(locale: &str) -> Option<&'static BuiltinLabels> {
    match locale {
        "en" => Some(&ENGLISH),
        "es" => Some(&SPANISH),
        _ => None,
    }
}

/// Table for `locale`, or English when the locale is unknown.
pub fn for_locale(locale: &str) -> &'static BuiltinLabels {
    lookup(locale).unwrap_or(&ENGLISH)
}
