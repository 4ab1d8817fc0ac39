use super::TemplateLocale;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use chrono_tz::Tz;

pub fn to_zoned(ts_millis: i64, timezone: &Tz) -> DateTime<Tz> {
    timezone.timestamp_millis(ts_millis)
}

/// Long-form date in the locale's customary order, e.g.
/// "Friday, August 7, 2026" or "Freitag, 7. August 2026".
pub fn format_long_date(date: &DateTime<Tz>, locale: TemplateLocale) -> String {
    let weekday = weekday_name(date.weekday(), locale);
    let month = month_name(date.month(), locale);
    match locale {
        TemplateLocale::En => format!("{}, {} {}, {}", weekday, month, date.day(), date.year()),
        TemplateLocale::De => format!("{}, {}. {} {}", weekday, date.day(), month, date.year()),
        TemplateLocale::Es | TemplateLocale::Pt => {
            format!("{}, {} de {} de {}", weekday, date.day(), month, date.year())
        }
        TemplateLocale::Fr => format!("{} {} {} {}", weekday, date.day(), month, date.year()),
    }
}

/// 12-hour clock time, e.g. "2:30 PM"
pub fn format_time(date: &DateTime<Tz>) -> String {
    let (pm, hour) = date.hour12();
    format!("{}:{:02} {}", hour, date.minute(), if pm { "PM" } else { "AM" })
}

fn weekday_name(weekday: Weekday, locale: TemplateLocale) -> &'static str {
    let names: [&'static str; 7] = match locale {
        TemplateLocale::En => [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ],
        TemplateLocale::De => [
            "Montag",
            "Dienstag",
            "Mittwoch",
            "Donnerstag",
            "Freitag",
            "Samstag",
            "Sonntag",
        ],
        TemplateLocale::Es => [
            "lunes",
            "martes",
            "miércoles",
            "jueves",
            "viernes",
            "sábado",
            "domingo",
        ],
        TemplateLocale::Fr => [
            "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
        ],
        TemplateLocale::Pt => [
            "segunda-feira",
            "terça-feira",
            "quarta-feira",
            "quinta-feira",
            "sexta-feira",
            "sábado",
            "domingo",
        ],
    };
    names[weekday.num_days_from_monday() as usize]
}

// month: January -> 1
fn month_name(month: u32, locale: TemplateLocale) -> &'static str {
    let names: [&'static str; 12] = match locale {
        TemplateLocale::En => [
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
        TemplateLocale::De => [
            "Januar",
            "Februar",
            "März",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ],
        TemplateLocale::Es => [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ],
        TemplateLocale::Fr => [
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ],
        TemplateLocale::Pt => [
            "janeiro",
            "fevereiro",
            "março",
            "abril",
            "maio",
            "junho",
            "julho",
            "agosto",
            "setembro",
            "outubro",
            "novembro",
            "dezembro",
        ],
    };
    names[(month - 1) as usize]
}
