//! Russian dataset. Cyrillic names exercise the transliteration table.

use crate::LocaleData;

pub const RU: LocaleData = LocaleData {
    code: "ru",
    first_names: &[
        "Александр", "Алексей", "Анастасия", "Андрей", "Анна", "Антон", "Валентина", "Василий",
        "Виктор", "Владимир", "Галина", "Дмитрий", "Евгений", "Екатерина", "Елена", "Иван",
        "Ирина", "Ксения", "Людмила", "Максим", "Мария", "Михаил", "Надежда", "Наталья",
        "Николай", "Ольга", "Павел", "Сергей", "Татьяна", "Фёдор", "Юлия", "Яна",
    ],
    last_names: &[
        "Андреев", "Богданов", "Васильев", "Волков", "Голубев", "Егоров", "Жуков", "Зайцев",
        "Иванов", "Козлов", "Кузнецов", "Лебедев", "Макаров", "Морозов", "Новиков", "Орлов",
        "Павлов", "Петров", "Попов", "Семёнов", "Сидоров", "Смирнов", "Соколов", "Соловьёв",
        "Степанов", "Фёдоров", "Чернов", "Шестаков", "Щербаков", "Юдин", "Яковлев",
    ],
    domains: &[
        "example.com",
        "example.net",
        "pochta.example.org",
    ],
    street_names: &[
        "улица Ленина",
        "улица Гагарина",
        "проспект Мира",
        "улица Садовая",
        "улица Пушкина",
        "Набережная улица",
        "улица Чехова",
        "Лесной переулок",
    ],
    cities: &[
        "Новгород",
        "Калуга",
        "Тверь",
        "Рязань",
        "Смоленск",
        "Ярославль",
        "Воронеж",
        "Томск",
    ],
};
