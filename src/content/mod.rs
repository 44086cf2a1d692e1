//! Static reference content: class timetables and the duty roster.

pub mod duties;
pub mod schedule;

pub use duties::DUTIES_TEXT;
pub use schedule::day_schedule;

/// Class profile; each has its own timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Math,
    Chem,
    Base,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Math, Profile::Chem, Profile::Base];

    /// Selector fragment used in callback data.
    pub fn key(self) -> &'static str {
        match self {
            Profile::Math => "math",
            Profile::Chem => "chem",
            Profile::Base => "base",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Profile::Math => "📐 Математика (профиль)",
            Profile::Chem => "🧪 Химия (профиль)",
            Profile::Base => "📘 База",
        }
    }

    /// Short label for the profile picker button.
    pub fn button_label(self) -> &'static str {
        match self {
            Profile::Math => "📐 Математика",
            Profile::Chem => "🧪 Химия",
            Profile::Base => "📘 База",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl SchoolDay {
    pub const ALL: [SchoolDay; 5] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SchoolDay::Monday => "pn",
            SchoolDay::Tuesday => "vt",
            SchoolDay::Wednesday => "sr",
            SchoolDay::Thursday => "cht",
            SchoolDay::Friday => "pt",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    pub fn short_label(self) -> &'static str {
        match self {
            SchoolDay::Monday => "Пн",
            SchoolDay::Tuesday => "Вт",
            SchoolDay::Wednesday => "Ср",
            SchoolDay::Thursday => "Чт",
            SchoolDay::Friday => "Пт",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for profile in Profile::ALL {
            assert_eq!(Profile::from_key(profile.key()), Some(profile));
        }
        for day in SchoolDay::ALL {
            assert_eq!(SchoolDay::from_key(day.key()), Some(day));
        }
        assert_eq!(Profile::from_key("bio"), None);
        assert_eq!(SchoolDay::from_key("sb"), None);
    }

    #[test]
    fn test_every_day_has_a_headed_schedule() {
        let headings = ["*Понедельник*", "*Вторник*", "*Среда*", "*Четверг*", "*Пятница*"];
        for profile in Profile::ALL {
            for (day, heading) in SchoolDay::ALL.into_iter().zip(headings) {
                assert!(day_schedule(profile, day).starts_with(heading));
            }
        }
    }

    #[test]
    fn test_duty_roster_covers_the_week() {
        for day in ["Понедельник:", "Вторник:", "Среда:", "Четверг:", "Пятница:"] {
            assert!(DUTIES_TEXT.contains(day));
        }
    }
}
