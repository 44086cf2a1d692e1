/// Cloakroom and canteen duty roster, Monday through Friday.
pub const DUTIES_TEXT: &str = "📌 Гардероб / столовая\n\
    \n\
    Понедельник:\n\
    1. Акрамова С.\n\
    2. Рыбарт В.\n\
    3. Еремеева К.\n\
    4. Дятлов В.\n\
    \n\
    Вторник:\n\
    1. Каверзникова А.\n\
    2. Иванова А.\n\
    3. Рыбарт В.\n\
    4. Овсянник С.\n\
    \n\
    Среда:\n\
    1. Зайцева А.\n\
    2. Комар В.\n\
    3. Перевозникова А.\n\
    4. Щербич В.\n\
    \n\
    Четверг:\n\
    1. Щигельская В.\n\
    2. Цмыг А.\n\
    3. Цмыг Я.\n\
    4. Овсянник С.\n\
    \n\
    Пятница:\n\
    1. Пациенок Д.\n\
    2. Дубовик А.\n\
    3. Дятлов В.\n\
    4. Самойлов В.";
