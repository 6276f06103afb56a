use crate::models::LanguageStrings;

// Field order: section, crn, credits, course details, course title,
// department, grade, description, close, courses, calendar, grades.
type Table = [&'static str; 12];

const AR: Table = [
    "الجزء",
    "CRN",
    "قروض",
    "تفاصيل الدورة",
    "عنوان الدورة",
    "قسم",
    "درجة",
    "وصف",
    "أغلق",
    "الدورات",
    "التقويم",
    "درجات",
];

const DE: Table = [
    "Abschnitt",
    "CRN",
    "Gutschriften",
    "Kursdetails",
    "Kursname",
    "Abteilung",
    "Klasse",
    "Beshreibung",
    "Schließsen",
    "Kurse",
    "Kalender",
    "Noten",
];

const EN: Table = [
    "Section",
    "CRN",
    "Credits",
    "Course Details",
    "Course Title",
    "Department",
    "Grade",
    "Description",
    "Close",
    "Courses",
    "Calendar",
    "Grades",
];

const SP: Table = [
    "Sección",
    "CRN",
    "Créditos",
    "Detalles del courso",
    "Título del curso",
    "Departmento",
    "Grado",
    "Descripción",
    "Conclur",
    "Cursos",
    "Calendario",
    "Grados",
];

const FR: Table = [
    "Section",
    "CRN",
    "Crédits",
    "Course Détails",
    "Titre de cours",
    "Départment",
    "Qualité",
    "La description",
    "Conclure",
    "Cours",
    "Calendrier",
    "Les notes",
];

fn table_for(language: &str) -> Option<&'static Table> {
    match language {
        "ar" => Some(&AR),
        "de" => Some(&DE),
        "en" | "en-US" => Some(&EN),
        "sp" => Some(&SP),
        "fr" => Some(&FR),
        _ => None,
    }
}

/// UI strings for a language tag. Tags are matched exactly; anything
/// unrecognized gets a record of empty strings.
pub fn strings_for(language: &str) -> LanguageStrings {
    let Some(t) = table_for(language) else {
        return LanguageStrings::default();
    };

    LanguageStrings {
        section: t[0].to_string(),
        crn: t[1].to_string(),
        credits: t[2].to_string(),
        course_details: t[3].to_string(),
        course_title: t[4].to_string(),
        department: t[5].to_string(),
        grade: t[6].to_string(),
        description: t[7].to_string(),
        close: t[8].to_string(),
        courses: t[9].to_string(),
        calendar: t[10].to_string(),
        grades: t[11].to_string(),
    }
}
