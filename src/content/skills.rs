use super::{SkillCategory, SkillEntry, TechBadge};
use SkillCategory::{Backend, Database, Devops, Frontend, Mobile};

const fn skill(name: &'static str, proficiency: u8, category: SkillCategory) -> SkillEntry {
    SkillEntry {
        name,
        proficiency,
        category,
    }
}

const fn badge(name: &'static str, color: &'static str, category: SkillCategory) -> TechBadge {
    TechBadge {
        name,
        color,
        category,
    }
}

/// Proficiency bars of the about section.
pub static SKILLS: &[SkillEntry] = &[
    skill("React", 95, Frontend),
    skill("Next.js", 90, Frontend),
    skill("TypeScript", 93, Frontend),
    skill("JavaScript", 96, Frontend),
    skill("Tailwind CSS", 94, Frontend),
    skill("HTML/CSS", 98, Frontend),
    skill("Node.js", 92, Backend),
    skill("Express", 88, Backend),
    skill("Python", 85, Backend),
    skill("Django", 80, Backend),
    skill("FastAPI", 78, Backend),
    skill("Java", 75, Backend),
    skill("PostgreSQL", 88, Database),
    skill("MongoDB", 85, Database),
    skill("MySQL", 82, Database),
    skill("Redis", 80, Database),
    skill("Docker", 87, Devops),
    skill("AWS", 85, Devops),
    skill("Git", 95, Devops),
    skill("CI/CD", 82, Devops),
    skill("Linux", 85, Devops),
];

/// Badges of the tabbed tech panel.
pub static TECH_BADGES: &[TechBadge] = &[
    badge("React", "#61DAFB", Frontend),
    badge("Next.js", "#000000", Frontend),
    badge("TypeScript", "#3178C6", Frontend),
    badge("JavaScript", "#F7DF1E", Frontend),
    badge("Tailwind CSS", "#06B6D4", Frontend),
    badge("HTML5", "#E34F26", Frontend),
    badge("CSS3", "#1572B6", Frontend),
    badge("React Router", "#CA4245", Frontend),
    badge("React Hook Form", "#EC5990", Frontend),
    badge("React Query", "#FF4154", Frontend),
    badge("Redux", "#764ABC", Frontend),
    badge("Node.js", "#339933", Backend),
    badge("Express", "#000000", Backend),
    badge("Python", "#3776AB", Backend),
    badge("Django", "#092E20", Backend),
    badge("FastAPI", "#009688", Backend),
    badge("Java", "#007396", Backend),
    badge("Spring Boot", "#6DB33F", Backend),
    badge("PostgreSQL", "#336791", Database),
    badge("MongoDB", "#47A248", Database),
    badge("MySQL", "#4479A1", Database),
    badge("Redis", "#DC382D", Database),
    badge("Docker", "#2496ED", Devops),
    badge("Git", "#F05032", Devops),
    badge("CI/CD", "#2088FF", Devops),
    badge("Linux", "#FCC624", Devops),
    badge("React Native", "#61DAFB", Mobile),
    badge("Flutter", "#02569B", Mobile),
    badge("Kotlin", "#7F52FF", Mobile),
    badge("Swift", "#FA7343", Mobile),
    badge("Android", "#3DDC84", Mobile),
    badge("iOS", "#000000", Mobile),
];
