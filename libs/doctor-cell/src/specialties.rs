use shared_i18n::Language;

/// Medical specialty as known to the backend, with its display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub id: u32,
    pub bg: &'static str,
    pub en: &'static str,
    pub de: &'static str,
}

impl Specialty {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Bg => self.bg,
            Language::En => self.en,
            Language::De => self.de,
        }
    }
}

// IDs match the backend specialty IDs.
pub const SPECIALTIES: &[Specialty] = &[
    Specialty { id: 41, bg: "Акупунктура", en: "Acupuncture", de: "Akupunktur" },
    Specialty { id: 1, bg: "Акушер-гинеколог", en: "Obstetrician-Gynecologist", de: "Frauenarzt" },
    Specialty { id: 80, bg: "Акушерка", en: "Midwife", de: "Hebamme" },
    Specialty { id: 2, bg: "Алерголог", en: "Allergist", de: "Allergologe" },
    Specialty { id: 83, bg: "Алтернативни практики", en: "Alternative Medicine", de: "Alternativmedizin" },
    Specialty { id: 52, bg: "Ангиолог", en: "Angiologist", de: "Angiologe" },
    Specialty { id: 56, bg: "Анестезиолог", en: "Anesthesiologist", de: "Anästhesist" },
    Specialty { id: 75, bg: "Аюрведа", en: "Ayurveda", de: "Ayurveda" },
    Specialty { id: 58, bg: "Боуен терапевт", en: "Bowen Therapist", de: "Bowen-Therapeut" },
    Specialty { id: 69, bg: "Вирусолог", en: "Virologist", de: "Virologe" },
    Specialty { id: 16, bg: "Вътрешни болести", en: "Internal Medicine", de: "Innere Medizin" },
    Specialty { id: 3, bg: "Гастроентеролог", en: "Gastroenterologist", de: "Gastroenterologe" },
    Specialty { id: 30, bg: "Гръден хирург", en: "Thoracic Surgeon", de: "Thoraxchirurg" },
    Specialty { id: 4, bg: "Дерматолог", en: "Dermatologist", de: "Dermatologe" },
    Specialty { id: 49, bg: "Детски гастроентеролог", en: "Pediatric Gastroenterologist", de: "Kinder-Gastroenterologe" },
    Specialty { id: 36, bg: "Детски ендокринолог", en: "Pediatric Endocrinologist", de: "Kinder-Endokrinologe" },
    Specialty { id: 48, bg: "Детски кардиолог", en: "Pediatric Cardiologist", de: "Kinder-Kardiologe" },
    Specialty { id: 23, bg: "Детски невролог", en: "Pediatric Neurologist", de: "Kinder-Neurologe" },
    Specialty { id: 31, bg: "Детски нефролог", en: "Pediatric Nephrologist", de: "Kinder-Nephrologe" },
    Specialty { id: 39, bg: "Детски психиатър", en: "Child Psychiatrist", de: "Kinderpsychiater" },
    Specialty { id: 33, bg: "Детски пулмолог", en: "Pediatric Pulmonologist", de: "Kinder-Pulmologe" },
    Specialty { id: 51, bg: "Детски ревматолог", en: "Pediatric Rheumatologist", de: "Kinder-Rheumatologe" },
    Specialty { id: 65, bg: "Детски хематолог", en: "Pediatric Hematologist", de: "Kinder-Hämatologe" },
    Specialty { id: 35, bg: "Детски хирург", en: "Pediatric Surgeon", de: "Kinderchirurg" },
    Specialty { id: 32, bg: "Диетолог", en: "Dietitian", de: "Ernährungsberater" },
    Specialty { id: 91, bg: "Ембриолог", en: "Embryologist", de: "Embryologe" },
    Specialty { id: 86, bg: "Ендодонт", en: "Endodontist", de: "Endodontologe" },
    Specialty { id: 6, bg: "Ендокринолог", en: "Endocrinologist", de: "Endokrinologe" },
    Specialty { id: 5, bg: "Естетична медицина", en: "Aesthetic Medicine", de: "Ästhetische Medizin" },
    Specialty { id: 7, bg: "Зъболекар (Стоматолог)", en: "Dentist", de: "Zahnarzt" },
    Specialty { id: 64, bg: "Изследване", en: "Examination", de: "Untersuchung" },
    Specialty { id: 85, bg: "Имплантолог", en: "Implantologist", de: "Implantologe" },
    Specialty { id: 68, bg: "Имунолог", en: "Immunologist", de: "Immunologe" },
    Specialty { id: 55, bg: "Инфекциозни болести", en: "Infectious Diseases", de: "Infektionskrankheiten" },
    Specialty { id: 8, bg: "Кардиолог", en: "Cardiologist", de: "Kardiologe" },
    Specialty { id: 53, bg: "Кардиохирург", en: "Cardiac Surgeon", de: "Herzchirurg" },
    Specialty { id: 57, bg: "Кинезитерапевт", en: "Kinesiotherapist", de: "Kinesiotherapeut" },
    Specialty { id: 70, bg: "Клинична лаборатория", en: "Clinical Laboratory", de: "Klinisches Labor" },
    Specialty { id: 79, bg: "Коуч", en: "Coach", de: "Coach" },
    Specialty { id: 54, bg: "Лицево-челюстен хирург", en: "Maxillofacial Surgeon", de: "Mund-Kiefer-Gesichtschirurg" },
    Specialty { id: 38, bg: "Логопед", en: "Speech Therapist", de: "Logopäde" },
    Specialty { id: 81, bg: "Лъчетерапевт", en: "Radiation Therapist", de: "Strahlentherapeut" },
    Specialty { id: 50, bg: "Мамолог", en: "Mammologist", de: "Mammologe" },
    Specialty { id: 78, bg: "Манипулация", en: "Manipulation", de: "Manipulation" },
    Specialty { id: 24, bg: "Медицинска генетика", en: "Medical Genetics", de: "Medizinische Genetik" },
    Specialty { id: 88, bg: "Медицинска сестра", en: "Nurse", de: "Krankenschwester" },
    Specialty { id: 93, bg: "Медицински козметик", en: "Medical Cosmetologist", de: "Medizinischer Kosmetiker" },
    Specialty { id: 67, bg: "Микробиолог", en: "Microbiologist", de: "Mikrobiologe" },
    Specialty { id: 10, bg: "Невролог", en: "Neurologist", de: "Neurologe" },
    Specialty { id: 37, bg: "Неврохирург", en: "Neurosurgeon", de: "Neurochirurg" },
    Specialty { id: 40, bg: "Неонатолог", en: "Neonatologist", de: "Neonatologe" },
    Specialty { id: 11, bg: "Нефролог (Бъбречни болести)", en: "Nephrologist", de: "Nephrologe" },
    Specialty { id: 72, bg: "Нуклеарна медицина", en: "Nuclear Medicine", de: "Nuklearmedizin" },
    Specialty { id: 95, bg: "Нутриционист", en: "Nutritionist", de: "Ernährungsberater" },
    Specialty { id: 43, bg: "Образна диагностика", en: "Imaging Diagnostics", de: "Bildgebende Diagnostik" },
    Specialty { id: 9, bg: "Общопрактикуващ лекар", en: "General Practitioner", de: "Allgemeinmediziner" },
    Specialty { id: 60, bg: "Озонотерапевт", en: "Ozone Therapist", de: "Ozontherapeut" },
    Specialty { id: 42, bg: "Онколог", en: "Oncologist", de: "Onkologe" },
    Specialty { id: 76, bg: "Орален хирург", en: "Oral Surgeon", de: "Oralchirurg" },
    Specialty { id: 61, bg: "Ортодонт", en: "Orthodontist", de: "Orthodontist" },
    Specialty { id: 12, bg: "Ортопед", en: "Orthopedist", de: "Orthopäde" },
    Specialty { id: 19, bg: "Отоневролог", en: "Otoneurologist", de: "Otoneurologe" },
    Specialty { id: 13, bg: "Офталмолог (Очен лекар)", en: "Ophthalmologist", de: "Augenarzt" },
    Specialty { id: 59, bg: "Паразитолог", en: "Parasitologist", de: "Parasitologe" },
    Specialty { id: 87, bg: "Пародонтолог", en: "Periodontist", de: "Parodontologe" },
    Specialty { id: 14, bg: "Педиатър", en: "Pediatrician", de: "Kinderarzt" },
    Specialty { id: 45, bg: "Пластичен хирург", en: "Plastic Surgeon", de: "Plastischer Chirurg" },
    Specialty { id: 89, bg: "Подиатър (Болести на ходилото)", en: "Podiatrist", de: "Podologe" },
    Specialty { id: 92, bg: "Предродилна/следродилна грижа", en: "Prenatal/Postnatal Care", de: "Prä-/Postnatale Betreuung" },
    Specialty { id: 84, bg: "Протетик", en: "Prosthetist", de: "Prothetiker" },
    Specialty { id: 25, bg: "Профилактични прегледи", en: "Preventive Examinations", de: "Vorsorgeuntersuchungen" },
    Specialty { id: 28, bg: "Психиатър", en: "Psychiatrist", de: "Psychiater" },
    Specialty { id: 34, bg: "Психолог", en: "Psychologist", de: "Psychologe" },
    Specialty { id: 46, bg: "Психотерапевт", en: "Psychotherapist", de: "Psychotherapeut" },
    Specialty { id: 15, bg: "Пулмолог (Белодробни болести)", en: "Pulmonologist", de: "Pulmologe" },
    Specialty { id: 44, bg: "Ревматолог", en: "Rheumatologist", de: "Rheumatologe" },
    Specialty { id: 66, bg: "Репродуктивна медицина", en: "Reproductive Medicine", de: "Reproduktionsmedizin" },
    Specialty { id: 74, bg: "Рехабилитатор", en: "Rehabilitation Specialist", de: "Rehabilitationsspezialist" },
    Specialty { id: 94, bg: "Сомнолог (Медицина на съня)", en: "Sleep Medicine Specialist", de: "Schlafmediziner" },
    Specialty { id: 47, bg: "Спортна медицина", en: "Sports Medicine", de: "Sportmedizin" },
    Specialty { id: 26, bg: "Съдов хирург", en: "Vascular Surgeon", de: "Gefäßchirurg" },
    Specialty { id: 73, bg: "Токсиколог", en: "Toxicologist", de: "Toxikologe" },
    Specialty { id: 17, bg: "УНГ", en: "ENT (Ear, Nose, Throat)", de: "HNO-Arzt" },
    Specialty { id: 20, bg: "Уролог", en: "Urologist", de: "Urologe" },
    Specialty { id: 22, bg: "Физиотерапевт", en: "Physiotherapist", de: "Physiotherapeut" },
    Specialty { id: 27, bg: "Хематолог (Клинична хематология)", en: "Hematologist", de: "Hämatologe" },
    Specialty { id: 71, bg: "Хематолог (Трансфузионна хематология)", en: "Transfusion Hematologist", de: "Transfusionshämatologe" },
    Specialty { id: 21, bg: "Хирург", en: "Surgeon", de: "Chirurg" },
    Specialty { id: 18, bg: "Хомеопат", en: "Homeopath", de: "Homöopath" },
    Specialty { id: 82, bg: "Юмейхо терапевт", en: "Yumeiho Therapist", de: "Yumeiho-Therapeut" },
];

pub fn specialty_by_id(id: u32) -> Option<&'static Specialty> {
    SPECIALTIES.iter().find(|s| s.id == id)
}

pub fn specialty_name(id: u32, language: Language) -> Option<&'static str> {
    specialty_by_id(id).map(|s| s.name(language))
}

/// Case-insensitive lookup across all three languages.
pub fn specialty_id_by_name(name: &str) -> Option<u32> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    SPECIALTIES
        .iter()
        .find(|s| [s.bg, s.en, s.de].iter().any(|n| n.to_lowercase() == needle))
        .map(|s| s.id)
}

pub fn specialties_for_language(language: Language) -> Vec<(u32, &'static str)> {
    SPECIALTIES.iter().map(|s| (s.id, s.name(language))).collect()
}
