//! Label tables for every localized UI string on the page.
//!
//! Tables are ordered `(key, text)` pairs. Keys are shared across languages;
//! components look them up through `LanguageSelector::translate`, which falls
//! back to the key itself when a table has no entry.

/// Label keys used by the page renderer.
pub mod keys {
    // Navigation
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const EXPERIENCE: &str = "experience";
    pub const CONTACT: &str = "contact";
    pub const HIRE_ME: &str = "hireMe";

    // Hero
    pub const FULLSTACK_DEVELOPER: &str = "fullstackDeveloper";
    pub const HERO_SUBTITLE: &str = "heroSubtitle";
    pub const VIEW_MY_WORK: &str = "viewMyWork";
    pub const DOWNLOAD_CV: &str = "downloadCV";
    pub const SCROLL_TO_EXPLORE: &str = "scrollToExplore";

    // About
    pub const ABOUT_ME: &str = "aboutMe";
    pub const ABOUT_SUBTITLE: &str = "aboutSubtitle";
    pub const WHO_I_AM: &str = "whoIAm";
    pub const MY_JOURNEY: &str = "myJourney";
    pub const DEVELOPMENT_PHILOSOPHY: &str = "developmentPhilosophy";
    pub const TECHNICAL_SKILLS: &str = "technicalSkills";
    pub const SOFT_SKILLS: &str = "softSkills";

    // Experience
    pub const PROFESSIONAL_JOURNEY: &str = "professionalJourney";
    pub const EXPERIENCE_SUBTITLE: &str = "experienceSubtitle";
    pub const WORK_EXPERIENCE: &str = "workExperience";
    pub const EDUCATION: &str = "education";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const RESPONSIBILITIES: &str = "responsibilities";
    pub const KEY_ACHIEVEMENTS: &str = "keyAchievements";

    // Projects
    pub const FEATURED_PROJECTS: &str = "featuredProjects";
    pub const PROJECTS_SUBTITLE: &str = "projectsSubtitle";
    pub const VIEW_DETAILS: &str = "viewDetails";
    pub const ALL_PROJECTS: &str = "allProjects";
    pub const MORE: &str = "moreTechnologies";
    pub const KEY_FEATURES: &str = "keyFeatures";
    pub const CHALLENGES: &str = "challenges";
    pub const RESULTS: &str = "results";
    pub const TECHNOLOGIES_USED: &str = "technologiesUsed";
    pub const VIEW_SOURCE_CODE: &str = "viewSourceCode";
    pub const LIVE_DEMO: &str = "liveDemo";
    pub const WATCH_DEMO: &str = "watchDemo";
    pub const CLOSE: &str = "close";
    pub const PREVIOUS_IMAGE: &str = "previousImage";
    pub const NEXT_IMAGE: &str = "nextImage";

    // Contact
    pub const GET_IN_TOUCH: &str = "getInTouch";
    pub const CONTACT_SUBTITLE: &str = "contactSubtitle";
    pub const LETS_CONNECT: &str = "letsConnect";
    pub const FOLLOW_ME: &str = "followMe";
    pub const AVAILABLE_FOR_FREELANCE: &str = "availableForFreelance";
    pub const SEND_MESSAGE: &str = "sendMessage";
    pub const YOUR_NAME: &str = "yourName";
    pub const YOUR_EMAIL: &str = "yourEmail";
    pub const SUBJECT: &str = "subject";
    pub const MESSAGE: &str = "message";
    pub const SEND: &str = "send";
    pub const SENDING: &str = "sending";
    pub const NAME_PLACEHOLDER: &str = "namePlaceholder";
    pub const EMAIL_PLACEHOLDER: &str = "emailPlaceholder";
    pub const SUBJECT_PLACEHOLDER: &str = "subjectPlaceholder";
    pub const MESSAGE_PLACEHOLDER: &str = "messagePlaceholder";
    pub const RESPONSE_TIME: &str = "responseTime";
    pub const EMAIL_LABEL: &str = "emailLabel";
    pub const PHONE_LABEL: &str = "phoneLabel";
    pub const LOCATION_LABEL: &str = "locationLabel";

    // Footer
    pub const FOOTER_DESCRIPTION: &str = "footerDescription";
    pub const QUICK_LINKS: &str = "quickLinks";
    pub const TECHNOLOGIES: &str = "technologies";
    pub const BUILT_WITH: &str = "builtWith";
    pub const ALL_RIGHTS_RESERVED: &str = "allRightsReserved";

    /// Every key the renderer reads.
    pub const ALL: &[&str] = &[
        HOME,
        ABOUT,
        PROJECTS,
        EXPERIENCE,
        CONTACT,
        HIRE_ME,
        FULLSTACK_DEVELOPER,
        HERO_SUBTITLE,
        VIEW_MY_WORK,
        DOWNLOAD_CV,
        SCROLL_TO_EXPLORE,
        ABOUT_ME,
        ABOUT_SUBTITLE,
        WHO_I_AM,
        MY_JOURNEY,
        DEVELOPMENT_PHILOSOPHY,
        TECHNICAL_SKILLS,
        SOFT_SKILLS,
        PROFESSIONAL_JOURNEY,
        EXPERIENCE_SUBTITLE,
        WORK_EXPERIENCE,
        EDUCATION,
        CERTIFICATIONS,
        RESPONSIBILITIES,
        KEY_ACHIEVEMENTS,
        FEATURED_PROJECTS,
        PROJECTS_SUBTITLE,
        VIEW_DETAILS,
        ALL_PROJECTS,
        MORE,
        KEY_FEATURES,
        CHALLENGES,
        RESULTS,
        TECHNOLOGIES_USED,
        VIEW_SOURCE_CODE,
        LIVE_DEMO,
        WATCH_DEMO,
        CLOSE,
        PREVIOUS_IMAGE,
        NEXT_IMAGE,
        GET_IN_TOUCH,
        CONTACT_SUBTITLE,
        LETS_CONNECT,
        FOLLOW_ME,
        AVAILABLE_FOR_FREELANCE,
        SEND_MESSAGE,
        YOUR_NAME,
        YOUR_EMAIL,
        SUBJECT,
        MESSAGE,
        SEND,
        SENDING,
        NAME_PLACEHOLDER,
        EMAIL_PLACEHOLDER,
        SUBJECT_PLACEHOLDER,
        MESSAGE_PLACEHOLDER,
        RESPONSE_TIME,
        EMAIL_LABEL,
        PHONE_LABEL,
        LOCATION_LABEL,
        FOOTER_DESCRIPTION,
        QUICK_LINKS,
        TECHNOLOGIES,
        BUILT_WITH,
        ALL_RIGHTS_RESERVED,
    ];
}

// ==================== Portuguese Labels ====================

/// Portuguese labels (default language)
pub const PORTUGUESE_LABELS: &[(&str, &str)] = &[
    // Navigation
    ("home", "Início"),
    ("about", "Sobre"),
    ("projects", "Projetos"),
    ("experience", "Experiência"),
    ("contact", "Contato"),
    ("hireMe", "Contrate-me"),
    // Hero
    ("fullstackDeveloper", "Desenvolvedor Fullstack"),
    (
        "heroSubtitle",
        "Sempre em busca de novos conhecimentos e desafios, aplicando aprendizado contínuo na criação de soluções inovadoras e robustas.",
    ),
    ("viewMyWork", "Ver meus trabalhos"),
    ("downloadCV", "Baixar Currículo"),
    ("scrollToExplore", "Role para explorar"),
    // About
    ("aboutMe", "Sobre Mim"),
    (
        "aboutSubtitle",
        "Desenvolvedor fullstack apaixonado pela missão de criar experiências digitais excepcionais",
    ),
    ("whoIAm", "Quem Sou"),
    ("myJourney", "Minha Jornada"),
    ("developmentPhilosophy", "Filosofia de Desenvolvimento"),
    ("technicalSkills", "Habilidades Técnicas"),
    ("softSkills", "Habilidades Interpessoais"),
    // Experience
    ("professionalJourney", "Trajetória Profissional"),
    (
        "experienceSubtitle",
        "Minha jornada na tecnologia, da educação a cargos de desenvolvimento sênior",
    ),
    ("workExperience", "Experiência de Trabalho"),
    ("education", "Educação"),
    ("certifications", "Certificações"),
    ("responsibilities", "Responsabilidades"),
    ("keyAchievements", "Principais Conquistas"),
    // Projects
    ("featuredProjects", "Projetos em Destaque"),
    (
        "projectsSubtitle",
        "Demonstrando minha experiência em TypeScript, React e desenvolvimento web moderno",
    ),
    ("viewDetails", "Ver Detalhes"),
    ("allProjects", "Todos"),
    ("moreTechnologies", "mais"),
    ("keyFeatures", "Principais Funcionalidades"),
    ("challenges", "Desafios"),
    ("results", "Resultados"),
    ("technologiesUsed", "Tecnologias Utilizadas"),
    ("viewSourceCode", "Ver Código Fonte"),
    ("liveDemo", "Demonstração ao Vivo"),
    ("watchDemo", "Assistir Demonstração"),
    ("close", "Fechar"),
    ("previousImage", "Imagem anterior"),
    ("nextImage", "Próxima imagem"),
    // Contact
    ("getInTouch", "Entre em Contato"),
    (
        "contactSubtitle",
        "Pronto para colaborar em seu próximo projeto? Vamos discutir como podemos dar vida às suas ideias",
    ),
    ("letsConnect", "Vamos Conectar"),
    ("followMe", "Siga-me"),
    ("availableForFreelance", "Disponível para projetos freelance"),
    ("sendMessage", "Enviar Mensagem"),
    ("yourName", "Seu Nome"),
    ("yourEmail", "Seu Email"),
    ("subject", "Assunto"),
    ("message", "Mensagem"),
    ("send", "Enviar"),
    ("sending", "Enviando..."),
    ("namePlaceholder", "Seu nome completo"),
    ("emailPlaceholder", "seu.email@exemplo.com"),
    ("subjectPlaceholder", "Sobre o que você gostaria de falar?"),
    (
        "messagePlaceholder",
        "Conte-me sobre seu projeto ou sua dúvida...",
    ),
    (
        "responseTime",
        "Costumo responder em até 24 horas. Para assuntos urgentes, entre em contato diretamente por telefone ou email.",
    ),
    ("emailLabel", "Email"),
    ("phoneLabel", "Telefone"),
    ("locationLabel", "Localização"),
    // Footer
    (
        "footerDescription",
        "Desenvolvedor fullstack criando soluções digitais robustas, do conceito à produção.",
    ),
    ("quickLinks", "Links Rápidos"),
    ("technologies", "Tecnologias"),
    ("builtWith", "Feito com dedicação e código limpo"),
    ("allRightsReserved", "Todos os direitos reservados"),
];

// ==================== English Labels ====================

/// English labels
pub const ENGLISH_LABELS: &[(&str, &str)] = &[
    // Navigation
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
    ("hireMe", "Hire Me"),
    // Hero
    ("fullstackDeveloper", "Fullstack Developer"),
    (
        "heroSubtitle",
        "Always seeking new knowledge and challenges, applying continuous learning in creating innovative and robust solutions.",
    ),
    ("viewMyWork", "View My Work"),
    ("downloadCV", "Download CV"),
    ("scrollToExplore", "Scroll to explore"),
    // About
    ("aboutMe", "About Me"),
    (
        "aboutSubtitle",
        "Passionate fullstack developer with a mission to create exceptional digital experiences",
    ),
    ("whoIAm", "Who I Am"),
    ("myJourney", "My Journey"),
    ("developmentPhilosophy", "Development Philosophy"),
    ("technicalSkills", "Technical Skills"),
    ("softSkills", "Soft Skills"),
    // Experience
    ("professionalJourney", "Professional Journey"),
    (
        "experienceSubtitle",
        "My path in technology, from education to senior development roles",
    ),
    ("workExperience", "Work Experience"),
    ("education", "Education"),
    ("certifications", "Certifications"),
    ("responsibilities", "Responsibilities"),
    ("keyAchievements", "Key Achievements"),
    // Projects
    ("featuredProjects", "Featured Projects"),
    (
        "projectsSubtitle",
        "Showcasing my expertise in TypeScript, React, and modern web development",
    ),
    ("viewDetails", "View Details"),
    ("allProjects", "All"),
    ("moreTechnologies", "more"),
    ("keyFeatures", "Key Features"),
    ("challenges", "Challenges"),
    ("results", "Results"),
    ("technologiesUsed", "Technologies Used"),
    ("viewSourceCode", "View Source Code"),
    ("liveDemo", "Live Demo"),
    ("watchDemo", "Watch Demo"),
    ("close", "Close"),
    ("previousImage", "Previous image"),
    ("nextImage", "Next image"),
    // Contact
    ("getInTouch", "Get In Touch"),
    (
        "contactSubtitle",
        "Ready to collaborate on your next project? Let's discuss how we can bring your ideas to life",
    ),
    ("letsConnect", "Let's Connect"),
    ("followMe", "Follow Me"),
    ("availableForFreelance", "Available for freelance projects"),
    ("sendMessage", "Send a Message"),
    ("yourName", "Your Name"),
    ("yourEmail", "Your Email"),
    ("subject", "Subject"),
    ("message", "Message"),
    ("send", "Send"),
    ("sending", "Sending..."),
    ("namePlaceholder", "Your full name"),
    ("emailPlaceholder", "your.email@example.com"),
    ("subjectPlaceholder", "What is this regarding?"),
    (
        "messagePlaceholder",
        "Tell me about your project or inquiry...",
    ),
    (
        "responseTime",
        "I typically respond within 24 hours. For urgent inquiries, feel free to reach out directly via phone or email.",
    ),
    ("emailLabel", "Email"),
    ("phoneLabel", "Phone"),
    ("locationLabel", "Location"),
    // Footer
    (
        "footerDescription",
        "Fullstack developer building robust digital solutions, from concept to production.",
    ),
    ("quickLinks", "Quick Links"),
    ("technologies", "Technologies"),
    ("builtWith", "Built with dedication and clean code"),
    ("allRightsReserved", "All rights reserved"),
];

/// Find `key` in a label table.
pub fn lookup(labels: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    labels
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}
