use super::{Biography, ContactInfo, ContactInfoKind, SocialLink, SoftSkill};
use crate::i18n::{Localized, LocalizedText};

pub const OWNER_NAME: &str = "Alexsander Augusto";

pub static BIOGRAPHY: Localized<Biography> = Localized::new(
    Biography {
        who_i_am: &[
            "Olá! Sou Alexsander Lima, um desenvolvedor fullstack que respira tecnologia e inovação. Minha paixão genuína por desvendar como as coisas funcionam 'nos bastidores' impulsionou minha jornada, e hoje, com um olhar aguçado para a eficiência e a usabilidade, transformo ideias e desafios em soluções digitais robustas e completas.",
            "Vejo a tecnologia como ponte entre problemas complexos e soluções elegantes. Além de minhas skills técnicas, trago para a equipe um espírito colaborativo, proativo, adaptável e comunicativo. Sou um aprendiz contínuo, aplicando ativamente novos conhecimentos para criar experiências digitais de alto impacto e excelência.",
        ],
        my_journey: &[
            "Minha jornada na programação iniciou-se como Técnico em Programação com especialização em Jogos Digitais pelo SENAI. Lá, adquiri uma base sólida em programação C#, lógica de programação, métodos ágeis e boas práticas de desenvolvimento. Também tive experiência prática com ferramentas como Unity, Blender, Visual Studio e Maya. Atualmente, aprofundo meus conhecimentos no Bacharelado em Engenharia de Computação pelo CEFET/MG, expandindo minha capacidade de transformar ideias em soluções tecnológicas.",
            "Sempre em busca do próximo desafio, dedico tempo diário para estudar novas tecnologias, contribuir para projetos open source e aplicar o aprendizado em projetos práticos. Além disso, trabalho há mais de 2 anos como freelancer em desenvolvimento web e mobile, sempre procurando novos desafios para colocar meus conhecimentos em prática. A tecnologia evolui rapidamente, e eu evoluo junto com ela.",
        ],
        development_philosophy: &[
            "Acredito em código limpo, bem documentado e testável. Priorizo arquiteturas escaláveis, componentização inteligente e metodologias ágeis, valorizando sempre o trabalho em equipe para alcançar os melhores resultados. A experiência do usuário e a qualidade do código são pilares fundamentais em cada projeto.",
        ],
    },
    Biography {
        who_i_am: &[
            "Hi! I'm Alexsander Lima, a fullstack developer who lives and breathes technology and innovation. A genuine passion for understanding how things work behind the scenes drove my journey, and today, with a keen eye for efficiency and usability, I turn ideas and challenges into robust, complete digital solutions.",
            "I see technology as a bridge between complex problems and elegant solutions. Beyond my technical skills, I bring a collaborative, proactive, adaptable and communicative spirit to the team. I am a continuous learner, actively applying new knowledge to build high-impact digital experiences.",
        ],
        my_journey: &[
            "My programming journey began as a Programming Technician specializing in Digital Games at SENAI. There I built a solid foundation in C# programming, programming logic, agile methods and development best practices, with hands-on experience in tools such as Unity, Blender, Visual Studio and Maya. I am now deepening that knowledge in a Bachelor's degree in Computer Engineering at CEFET/MG, expanding my ability to turn ideas into technology solutions.",
            "Always looking for the next challenge, I spend time every day studying new technologies, contributing to open source and applying what I learn in practical projects. I have also worked for more than 2 years as a freelance web and mobile developer, always seeking new challenges to put my knowledge into practice. Technology evolves quickly, and I evolve with it.",
        ],
        development_philosophy: &[
            "I believe in clean, well-documented and testable code. I favour scalable architectures, thoughtful componentization and agile methodologies, and I value teamwork to reach the best results. User experience and code quality are core pillars of every project.",
        ],
    },
);

pub static SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill {
        icon: "users",
        title: LocalizedText::new("Trabalho em Equipe", "Team Collaboration"),
        description: LocalizedText::new(
            "Atuação eficaz em equipes multidisciplinares",
            "Working effectively in cross-functional teams",
        ),
    },
    SoftSkill {
        icon: "lightbulb",
        title: LocalizedText::new("Resolução de Problemas", "Problem Solving"),
        description: LocalizedText::new(
            "Transformar desafios complexos em soluções gerenciáveis",
            "Breaking down complex challenges into manageable solutions",
        ),
    },
    SoftSkill {
        icon: "message-square",
        title: LocalizedText::new("Comunicação", "Communication"),
        description: LocalizedText::new(
            "Comunicação técnica clara com as partes interessadas",
            "Clear technical communication with stakeholders",
        ),
    },
    SoftSkill {
        icon: "refresh-cw",
        title: LocalizedText::new("Aprendizado Contínuo", "Continuous Learning"),
        description: LocalizedText::new(
            "Sempre atualizado com as tecnologias e boas práticas mais recentes",
            "Staying updated with latest technologies and best practices",
        ),
    },
];

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        kind: ContactInfoKind::Email,
        value: "alexsanderaugusto142019@gmail.com",
        href: Some("mailto:alexsanderaugusto142019@gmail.com"),
    },
    ContactInfo {
        kind: ContactInfoKind::Phone,
        value: "(31) 98256-8421",
        href: Some("tel:+5531982568421"),
    },
    ContactInfo {
        kind: ContactInfoKind::Location,
        value: "Belo Horizonte, Minas Gerais",
        href: None,
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/Alexsander532",
        icon: "github",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/alexsander-augusto-lima-9b49221b4",
        icon: "linkedin",
    },
    SocialLink {
        label: "X (Twitter)",
        url: "https://x.com/AlexDev2025",
        icon: "x",
    },
];

pub static FOOTER_TECHNOLOGIES: &[&str] = &["TypeScript", "React", "Node.js", "Tailwind CSS"];
