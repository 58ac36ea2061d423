//! Default demo data inserted into empty collections.

use std::num::NonZeroU32;

use careerpath_domain::career::{Career, JobType};
use careerpath_domain::counselor::Counselor;
use careerpath_domain::quiz::{QuizOption, TestQuestion};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn step(n: u32) -> NonZeroU32 {
    NonZeroU32::MIN.saturating_add(n.saturating_sub(1))
}

pub fn careers() -> Vec<Career> {
    vec![
        Career {
            icon: "Stethoscope".into(),
            name_en: "Nurse".into(),
            name_te: "నర్స్".into(),
            short_desc_en: "Care for patients in hospitals and clinics.".into(),
            short_desc_te: "ఆస్పత్రుల్లో రోగుల సంరక్షణ.".into(),
            salary_min: 15000,
            salary_max: 40000,
            education: "Diploma/B.Sc Nursing".into(),
            job_type: JobType::Government,
            field: "Healthcare".into(),
            skills: strings(&["Compassion", "Communication", "Basic Medical"]),
            tags: strings(&["helping", "people"]),
            growth_path_en: strings(&["Nursing Student", "Staff Nurse", "Head Nurse"]),
            growth_path_te: strings(&["విద్యార్థి నర్స్", "స్టాఫ్ నర్స్", "హెడ్ నర్స్"]),
        },
        Career {
            icon: "Wrench".into(),
            name_en: "Electrician".into(),
            name_te: "ఎలక్ట్రిషియన్".into(),
            short_desc_en: "Install and repair electrical systems.".into(),
            short_desc_te: "విద్యుత్ వ్యవస్థల ఏర్పాటు మరియు మరమ్మత్తులు.".into(),
            salary_min: 12000,
            salary_max: 35000,
            education: "ITI Electrician / Apprenticeship".into(),
            job_type: JobType::Private,
            field: "Trades".into(),
            skills: strings(&["Problem Solving", "Safety", "Tools"]),
            tags: strings(&["fixing", "hands-on"]),
            growth_path_en: strings(&["Apprentice", "Technician", "Contractor"]),
            growth_path_te: strings(&["శిక్షణార్థి", "టెక్నీషియన్", "కాంట్రాక్టర్"]),
        },
        Career {
            icon: "PenTool".into(),
            name_en: "Teacher".into(),
            name_te: "ఉపాధ్యాయుడు".into(),
            short_desc_en: "Teach students and guide learning.".into(),
            short_desc_te: "విద్యార్థులకు బోధించడం మరియు మార్గనిర్దేశం.".into(),
            salary_min: 18000,
            salary_max: 50000,
            education: "B.Ed / D.Ed".into(),
            job_type: JobType::Government,
            field: "Education".into(),
            skills: strings(&["Communication", "Patience"]),
            tags: strings(&["teaching", "helping"]),
            growth_path_en: strings(&["Assistant Teacher", "Teacher", "Headmaster"]),
            growth_path_te: strings(&["సహాయ ఉపాధ్యాయుడు", "ఉపాధ్యాయుడు", "హెడ్‌మాస్టర్"]),
        },
    ]
}

/// First quiz step. Also served alone when no store is configured.
pub fn fallback_question() -> TestQuestion {
    TestQuestion {
        step: step(1),
        question_en: "Which activity do you enjoy most?".into(),
        question_te: "మీకు ఎక్కువగా ఇష్టమయ్యే చర్య ఏది?".into(),
        options: vec![
            QuizOption::new("fix", "Fixing things", "వస్తువులు సరిచేయడం", "Wrench"),
            QuizOption::new("help", "Helping people", "జనాలకు సహాయం చేయడం", "Heart"),
            QuizOption::new("teach", "Teaching others", "ఇతరులకు బోధించడం", "BookOpen"),
            QuizOption::new("create", "Drawing/creative", "డ్రాయింగ్/సృజనాత్మక", "PenTool"),
        ],
    }
}

pub fn questions() -> Vec<TestQuestion> {
    vec![
        fallback_question(),
        TestQuestion {
            step: step(2),
            question_en: "Where do you prefer to work?".into(),
            question_te: "మీకు ఏ పనిస్థలం ఇష్టం?".into(),
            options: vec![
                QuizOption::new("out", "Outdoors", "బయట", "Trees"),
                QuizOption::new("in", "Indoors", "లోపల", "Home"),
                QuizOption::new("both", "Both", "రెండూ", "Sun"),
            ],
        },
        TestQuestion {
            step: step(3),
            question_en: "What matters more?".into(),
            question_te: "మీకు ఎక్కువ ముఖ్యమైనది?".into(),
            options: vec![
                QuizOption::new("pay", "High salary", "ఎక్కువ జీతం", "IndianRupee"),
                QuizOption::new("secure", "Job security", "ఉద్యోగ భద్రత", "Shield"),
                QuizOption::new("impact", "Helping society", "సమాజానికి సహాయం", "HandHeart"),
            ],
        },
        TestQuestion {
            step: step(4),
            question_en: "Your strength?".into(),
            question_te: "మీ బలం?".into(),
            options: vec![
                QuizOption::new("hands", "Hands-on work", "చేతులతో పని", "Hammer"),
                QuizOption::new("people", "People skills", "మనుషులతో సామర్థ్యం", "Users"),
                QuizOption::new("logic", "Logic/Math", "తార్కికం/గణితం", "FunctionSquare"),
                QuizOption::new("art", "Art/Design", "కళ/డిజైన్", "Palette"),
            ],
        },
        TestQuestion {
            step: step(5),
            question_en: "Preferred employer?".into(),
            question_te: "ఇష్టమైన ఉద్యోగం?".into(),
            options: vec![
                QuizOption::new("govt", "Government", "ప్రభుత్వ", "Building2"),
                QuizOption::new("private", "Private", "ప్రైవేట్", "Briefcase"),
                QuizOption::new("self", "Self-employed", "స్వయం ఉపాధి", "Store"),
            ],
        },
    ]
}

pub fn counselors() -> Vec<Counselor> {
    vec![
        Counselor {
            name: "Anitha R.".into(),
            phone: "90000 11111".into(),
            district: "Anantapur".into(),
        },
        Counselor {
            name: "Srinivas K.".into(),
            phone: "90000 22222".into(),
            district: "Kurnool".into(),
        },
    ]
}
