use crate::content::{Profile, SchoolDay};

/// Markdown timetable for one profile on one school day.
pub fn day_schedule(profile: Profile, day: SchoolDay) -> &'static str {
    match (profile, day) {
        (Profile::Math, SchoolDay::Monday) => "*Понедельник*\n\
             2️⃣ География 🌍 *(08.55 : 09.40)*\n\
             3️⃣ Алгебра ➗ *(09.55 : 10.40)*\n\
             4️⃣ Геометрия 📐 *(10.55 : 11.40)*\n\
             5️⃣ Физкультура 🏃 *(11.55 : 12.40)*\n\
             6️⃣ Русский 🇷🇺 *(12.50 : 13.35)*\n\
             7️⃣ Химия 🧪 *(13.45 : 14.30)*",
        (Profile::Math, SchoolDay::Tuesday) => "*Вторник*\n\
             2️⃣ История 🏛 *(08.55 : 09.40)*\n\
             3️⃣ Физика ⚡ *(09.55 : 10.40)*\n\
             4️⃣ Иностранный 🌍 *(10.55 : 11.40)*\n\
             5️⃣ Информатика 💻 *(11.55 : 12.40)*\n\
             6️⃣ Белорусский 🇧🇾 *(12.50 : 13.35)*\n\
             7️⃣ Бел. лит 📚 *(13.45 : 14.30)*\n\
             8️⃣ Классный час ⏰ *(14.40 : 15.25)*",
        (Profile::Math, SchoolDay::Wednesday) => "*Среда*\n\
             2️⃣ Черчение 📏 *(08.55 : 09.40)*\n\
             3️⃣ Биология 🧬 *(09.55 : 10.40)*\n\
             4️⃣ Химия 🧪 *(10.55 : 11.40)*\n\
             5️⃣ Иностранный 🌍 *(11.55 : 12.40)*\n\
             6️⃣ Физика ⚡ *(12.50 : 13.35)*\n\
             7️⃣ Алгебра ➗ *(13.45 : 14.30)*\n\
             8️⃣ Геометрия 📐 *(14.40 : 15.25)*",
        (Profile::Math, SchoolDay::Thursday) => "*Четверг*\n\
             1️⃣ Русский 🇷🇺 *(08.00 : 08.45)*\n\
             2️⃣ Алгебра ➗ *(08.55 : 09.40)*\n\
             3️⃣ История 🏛 *(09.55 : 10.40)*\n\
             4️⃣ Физкультура 🏃 *(10.55 : 11.40)*\n\
             5️⃣ Белорусский 🇧🇾 *(11.55 : 12.40)*\n\
             6️⃣ Рус. лит 📚 *(12.50 : 13.35)*\n\
             7️⃣ Русский 🇷🇺 *(13.45 : 14.30)*\n\
             8️⃣ Инф. час ⏰ *(14.40 : 15.25)*",
        (Profile::Math, SchoolDay::Friday) => "*Пятница*\n\
             2️⃣ Физкультура 🏃 *(08.55 : 09.40)*\n\
             3️⃣ Биология 🧬 *(09.55 : 10.40)*\n\
             4️⃣ Общество ⚖️ *(10.55 : 11.40)*\n\
             5️⃣ Доприз/Мед 🪖 *(11.55 : 12.40)*\n\
             6️⃣ Русский 🇷🇺 *(12.50 : 13.35)*\n\
             7️⃣ Алгебра ➗ *(13.45 : 14.30)*",
        (Profile::Chem, SchoolDay::Monday) => "*Понедельник*\n\
             1️⃣ Алгебра ➗ *(08.00 : 08.45)*\n\
             2️⃣ География 🌍 *(08.55 : 09.40)*\n\
             3️⃣ Химия 🧪 *(09.55 : 10.40)*\n\
             4️⃣ Химия 🧪 *(10.55 : 11.40)*\n\
             5️⃣ Физкультура 🏃 *(11.55 : 12.40)*\n\
             6️⃣ Русский 🇷🇺 *(12.50 : 13.35)*",
        (Profile::Chem, SchoolDay::Tuesday) => "*Вторник*\n\
             1️⃣ Алгебра ➗ *(08.00 : 08.45)*\n\
             2️⃣ История 🏛 *(08.55 : 09.40)*\n\
             3️⃣ Физика ⚡ *(09.55 : 10.40)*\n\
             4️⃣ Иностранный 🌍 *(10.55 : 11.40)*\n\
             5️⃣ Химия 🧪 *(11.55 : 12.40)*\n\
             6️⃣ Белорусский 🇧🇾 *(12.50 : 13.35)*\n\
             7️⃣ Бел. лит 📚 *(13.45 : 14.30)*\n\
             8️⃣ Классный час ⏰ *(14.40 : 15.25)*",
        (Profile::Chem, SchoolDay::Wednesday) => "*Среда*\n\
             1️⃣ Алгебра ➗ *(08.00 : 08.45)*\n\
             2️⃣ Черчение 📏 *(08.55 : 09.40)*\n\
             3️⃣ Биология 🧬 *(09.55 : 10.40)*\n\
             4️⃣ Информатика 💻 *(10.55 : 11.40)*\n\
             5️⃣ Иностранный 🌍 *(11.55 : 12.40)*\n\
             6️⃣ Физика ⚡ *(12.50 : 13.35)*",
        (Profile::Chem, SchoolDay::Thursday) => "*Четверг*\n\
             1️⃣ Русский 🇷🇺 *(08.00 : 08.45)*\n\
             2️⃣ Химия 🧪 *(08.55 : 09.40)*\n\
             3️⃣ История 🏛 *(09.55 : 10.40)*\n\
             4️⃣ Физкультура 🏃 *(10.55 : 11.40)*\n\
             5️⃣ Белорусский 🇧🇾 *(11.55 : 12.40)*\n\
             6️⃣ Рус. лит 📚 *(12.50 : 13.35)*\n\
             7️⃣ Русский 🇷🇺 *(13.45 : 14.30)*\n\
             8️⃣ Инф. час ⏰ *(14.40 : 15.25)*",
        (Profile::Chem, SchoolDay::Friday) => "*Пятница*\n\
             1️⃣ Алгебра ➗ *(08.00 : 08.45)*\n\
             2️⃣ Физкультура 🏃 *(08.55 : 09.40)*\n\
             3️⃣ Биология 🧬 *(09.55 : 10.40)*\n\
             4️⃣ Общество ⚖️ *(10.55 : 11.40)*\n\
             5️⃣ Доприз/Мед 🪖 *(11.55 : 12.40)*\n\
             6️⃣ Русский 🇷🇺 *(12.50 : 13.35)*",
        (Profile::Base, SchoolDay::Monday) => "*Понедельник*\n\
             1️⃣ Алгебра ➗ *(08.00 : 08.45)*\n\
             2️⃣ География 🌍 *(08.55 : 09.40)*\n\
             5️⃣ Физкультура 🏃 *(11.55 : 12.40)*\n\
             6️⃣ Русский 🇷🇺 *(12.50 : 13.35)*\n\
             7️⃣ Химия 🧪 *(13.45 : 14.30)*",
        (Profile::Base, SchoolDay::Tuesday) => "*Вторник*\n\
             1️⃣ Алгебра ➗ *(08.00 : 08.45)*\n\
             2️⃣ История 🏛 *(08.55 : 09.40)*\n\
             3️⃣ Физика ⚡ *(09.55 : 10.40)*\n\
             4️⃣ Иностранный 🌍 *(10.55 : 11.40)*\n\
             5️⃣ Информатика 💻 *(11.55 : 12.40)*\n\
             6️⃣ Белорусский 🇧🇾 *(12.50 : 13.35)*\n\
             7️⃣ Бел. лит 📚 *(13.45 : 14.30)*\n\
             8️⃣ Классный час ⏰ *(14.40 : 15.25)*",
        (Profile::Base, SchoolDay::Wednesday) => "*Среда*\n\
             1️⃣ Алгебра ➗ *(08.00 : 08.45)*\n\
             2️⃣ Черчение 📏 *(08.55 : 09.40)*\n\
             3️⃣ Биология 🧬 *(09.55 : 10.40)*\n\
             4️⃣ Химия 🧪 *(10.55 : 11.40)*\n\
             5️⃣ Иностранный 🌍 *(11.55 : 12.40)*\n\
             6️⃣ Физика ⚡ *(12.50 : 13.35)*",
        (Profile::Base, SchoolDay::Thursday) => "*Четверг*\n\
             1️⃣ Русский 🇷🇺 *(08.00 : 08.45)*\n\
             3️⃣ История 🏛 *(09.55 : 10.40)*\n\
             4️⃣ Физкультура 🏃 *(10.55 : 11.40)*\n\
             5️⃣ Белорусский 🇧🇾 *(11.55 : 12.40)*\n\
             6️⃣ Рус. лит 📚 *(12.50 : 13.35)*\n\
             7️⃣ Русский 🇷🇺 *(13.45 : 14.30)*\n\
             8️⃣ Инф. час ⏰ *(14.40 : 15.25)*",
        (Profile::Base, SchoolDay::Friday) => "*Пятница*\n\
             1️⃣ Алгебра ➗ *(08.00 : 08.45)*\n\
             2️⃣ Физкультура 🏃 *(08.55 : 09.40)*\n\
             3️⃣ Биология 🧬 *(09.55 : 10.40)*\n\
             4️⃣ Общество ⚖️ *(10.55 : 11.40)*\n\
             5️⃣ Доприз/Мед 🪖 *(11.55 : 12.40)*",
    }
}
