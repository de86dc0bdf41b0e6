// SPDX-License-Identifier: MPL-2.0
//! The fixed chronicle of historical pandemics, in chronological order.

use super::pandemic::{PandemicRecord, RecordId, Severity};

/// Every record shown by the application. Never mutated.
pub static PANDEMICS: [PandemicRecord; 11] = [
    PandemicRecord {
        id: RecordId::new("1"),
        name: "Чума Юстиниана",
        year: 541,
        period: "541-549 гг.",
        deaths: "25-100 млн",
        affected: "Византийская империя",
        description: "Первая зарегистрированная пандемия чумы. Уничтожила до половины населения Византии и значительно ослабила империю.",
        region: "Средиземноморье, Европа, Азия",
        severity: Severity::Critical,
    },
    PandemicRecord {
        id: RecordId::new("2"),
        name: "Чёрная смерть",
        year: 1347,
        period: "1347-1353 гг.",
        deaths: "75-200 млн",
        affected: "Европа, Азия, Африка",
        description: "Самая разрушительная пандемия в истории человечества. Погибло от 30% до 60% населения Европы.",
        region: "Евразия, Северная Африка",
        severity: Severity::Critical,
    },
    PandemicRecord {
        id: RecordId::new("3"),
        name: "Оспа",
        year: 1520,
        period: "1520-1980 гг.",
        deaths: "300-500 млн",
        affected: "Весь мир",
        description: "Вирусное заболевание, которое опустошало человечество веками. Ликвидировано в 1980 году благодаря вакцинации.",
        region: "Весь мир",
        severity: Severity::Critical,
    },
    PandemicRecord {
        id: RecordId::new("4"),
        name: "Холера",
        year: 1817,
        period: "1817-настоящее время",
        deaths: "40+ млн",
        affected: "Весь мир",
        description: "Семь пандемий холеры. Остается проблемой в развивающихся странах с плохой санитарией.",
        region: "Индия, Азия, Африка, Европа",
        severity: Severity::High,
    },
    PandemicRecord {
        id: RecordId::new("5"),
        name: "Испанский грипп",
        year: 1918,
        period: "1918-1920 гг.",
        deaths: "50-100 млн",
        affected: "500 млн",
        description: "Самая смертоносная пандемия гриппа в истории. Заразила треть населения планеты.",
        region: "Весь мир",
        severity: Severity::Critical,
    },
    PandemicRecord {
        id: RecordId::new("6"),
        name: "Азиатский грипп",
        year: 1957,
        period: "1957-1958 гг.",
        deaths: "1-2 млн",
        affected: "Весь мир",
        description: "Пандемия гриппа H2N2, начавшаяся в Китае и быстро распространившаяся по всему миру.",
        region: "Весь мир",
        severity: Severity::High,
    },
    PandemicRecord {
        id: RecordId::new("7"),
        name: "ВИЧ/СПИД",
        year: 1981,
        period: "1981-настоящее время",
        deaths: "40+ млн",
        affected: "85+ млн",
        description: "Глобальная пандемия, вызванная вирусом иммунодефицита человека. Остается серьезной проблемой здравоохранения.",
        region: "Весь мир",
        severity: Severity::Critical,
    },
    PandemicRecord {
        id: RecordId::new("8"),
        name: "Атипичная пневмония (SARS)",
        year: 2002,
        period: "2002-2003 гг.",
        deaths: "774",
        affected: "8,098",
        description: "Первая серьезная и легко передающаяся болезнь XXI века. Была успешно локализована.",
        region: "Китай, Азия",
        severity: Severity::Moderate,
    },
    PandemicRecord {
        id: RecordId::new("9"),
        name: "Свиной грипп (H1N1)",
        year: 2009,
        period: "2009-2010 гг.",
        deaths: "150-575 тыс",
        affected: "700 млн - 1.4 млрд",
        description: "Пандемия гриппа, вызванная новым штаммом H1N1. Поразила более 10% населения планеты.",
        region: "Весь мир",
        severity: Severity::High,
    },
    PandemicRecord {
        id: RecordId::new("10"),
        name: "Эбола",
        year: 2014,
        period: "2014-2016 гг.",
        deaths: "11,323",
        affected: "28,616",
        description: "Крупнейшая вспышка лихорадки Эбола в истории. Высокая летальность до 50%.",
        region: "Западная Африка",
        severity: Severity::High,
    },
    PandemicRecord {
        id: RecordId::new("11"),
        name: "COVID-19",
        year: 2019,
        period: "2019-настоящее время",
        deaths: "7+ млн",
        affected: "770+ млн",
        description: "Пандемия коронавирусной инфекции, вызвавшая глобальный кризис здравоохранения и экономики.",
        region: "Весь мир",
        severity: Severity::Critical,
    },
];
