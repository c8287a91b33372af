use super::{ExperienceEntry, ExperienceKind};
use crate::i18n::Localized;

/// Work, education and certification records, one table per language with
/// matching ids and order.
pub static EXPERIENCES: Localized<&[ExperienceEntry]> = Localized::new(PORTUGUESE, ENGLISH);

const ENGLISH: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: "senior-dev",
        kind: ExperienceKind::Work,
        title: "Senior Fullstack Developer",
        org: "TechCorp Solutions",
        location: "San Francisco, CA",
        period: "2022 - Present",
        description: "Leading development of enterprise-scale applications using TypeScript, React, and Node.js",
        responsibilities: &[
            "Architected and developed microservices using TypeScript and Express",
            "Built responsive frontends with React and Tailwind CSS",
            "Mentored junior developers on TypeScript best practices",
            "Implemented CI/CD pipelines reducing deployment time by 60%",
            "Led code reviews focusing on type safety and maintainable architecture",
        ],
        technologies: &["TypeScript", "React", "Node.js", "AWS", "Docker", "PostgreSQL", "Tailwind CSS"],
        achievements: Some(&[
            "Reduced application load time by 40% through optimization",
            "Led team of 5 developers on critical product launch",
            "Implemented TypeScript migration reducing bugs by 70%",
        ]),
    },
    ExperienceEntry {
        id: "fullstack-dev",
        kind: ExperienceKind::Work,
        title: "Fullstack Developer",
        org: "StartupXYZ",
        location: "Austin, TX",
        period: "2020 - 2022",
        description: "Developed full-stack applications from conception to deployment using modern web technologies",
        responsibilities: &[
            "Built scalable React applications with TypeScript",
            "Designed and implemented RESTful APIs",
            "Integrated third-party services and payment systems",
            "Collaborated with designers to implement pixel-perfect UIs using Tailwind CSS",
            "Participated in agile development processes",
        ],
        technologies: &["JavaScript", "TypeScript", "React", "Python", "Django", "MongoDB"],
        achievements: Some(&[
            "Delivered 15+ features on schedule",
            "Improved user engagement by 35%",
            "Maintained 99.9% uptime for critical systems",
        ]),
    },
    ExperienceEntry {
        id: "frontend-dev",
        kind: ExperienceKind::Work,
        title: "Frontend Developer",
        org: "WebAgency Pro",
        location: "Remote",
        period: "2019 - 2020",
        description: "Specialized in creating responsive and interactive user interfaces for client projects",
        responsibilities: &[
            "Developed responsive websites using React and modern CSS",
            "Collaborated with UX/UI designers on user interface implementation",
            "Optimized applications for performance and accessibility",
            "Maintained and updated legacy codebases",
        ],
        technologies: &["JavaScript", "React", "CSS3", "HTML5", "Git"],
        achievements: Some(&[
            "Delivered 20+ client projects successfully",
            "Achieved 98% client satisfaction rate",
            "Reduced page load times by average of 50%",
        ]),
    },
    ExperienceEntry {
        id: "cs-degree",
        kind: ExperienceKind::Education,
        title: "Bachelor of Computer Engineering",
        org: "CEFET-MG",
        location: "Belo Horizonte, MG",
        period: "In progress",
        description: "Computer engineering fundamentals with a focus on software engineering and systems",
        responsibilities: &[
            "Core coursework in algorithms, data structures, and software engineering",
            "Specialized in web development and database systems",
            "Participated in hackathons and coding competitions",
        ],
        technologies: &["C", "Java", "Python", "SQL", "React", "Node.js"],
        achievements: Some(&[
            "Applied coursework to freelance web and mobile projects",
            "Won a university hackathon with a TypeScript-based project",
        ]),
    },
    ExperienceEntry {
        id: "senai-technician",
        kind: ExperienceKind::Education,
        title: "Programming Technician, Digital Games",
        org: "SENAI",
        location: "Belo Horizonte, MG",
        period: "Completed",
        description: "Technical programme in programming with a specialization in digital games",
        responsibilities: &[
            "C# programming and programming logic",
            "Agile methods and development best practices",
            "Hands-on work with Unity, Blender, Visual Studio and Maya",
        ],
        technologies: &["C#", "Unity", "Blender", "Visual Studio", "Maya"],
        achievements: None,
    },
    ExperienceEntry {
        id: "aws-cert",
        kind: ExperienceKind::Certification,
        title: "AWS Certified Solutions Architect",
        org: "Amazon Web Services",
        location: "Online",
        period: "2023",
        description: "Professional certification demonstrating expertise in designing distributed systems on AWS",
        responsibilities: &[
            "Mastered AWS core services and architecture patterns",
            "Learned best practices for security and scalability",
            "Gained expertise in cost optimization strategies",
        ],
        technologies: &["AWS", "EC2", "S3", "Lambda", "RDS", "CloudFormation"],
        achievements: None,
    },
    ExperienceEntry {
        id: "ts-cert",
        kind: ExperienceKind::Certification,
        title: "TypeScript Advanced Certification",
        org: "Microsoft Learn",
        location: "Online",
        period: "2022",
        description: "Advanced certification in TypeScript development and best practices",
        responsibilities: &[
            "Advanced type system concepts and generic programming",
            "Module systems and declaration merging",
            "Integration with modern frameworks and build tools",
        ],
        technologies: &["TypeScript", "Node.js", "React", "Webpack"],
        achievements: None,
    },
];

const PORTUGUESE: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: "senior-dev",
        kind: ExperienceKind::Work,
        title: "Desenvolvedor Fullstack Sênior",
        org: "TechCorp Solutions",
        location: "San Francisco, CA",
        period: "2022 - Atual",
        description: "Liderando o desenvolvimento de aplicações corporativas com TypeScript, React e Node.js",
        responsibilities: &[
            "Arquitetei e desenvolvi microsserviços com TypeScript e Express",
            "Construí frontends responsivos com React e Tailwind CSS",
            "Orientei desenvolvedores júnior em boas práticas de TypeScript",
            "Implementei pipelines de CI/CD reduzindo o tempo de deploy em 60%",
            "Conduzi revisões de código com foco em segurança de tipos e arquitetura sustentável",
        ],
        technologies: &["TypeScript", "React", "Node.js", "AWS", "Docker", "PostgreSQL", "Tailwind CSS"],
        achievements: Some(&[
            "Reduzi o tempo de carregamento da aplicação em 40% com otimizações",
            "Liderei uma equipe de 5 desenvolvedores em um lançamento crítico",
            "Conduzi a migração para TypeScript reduzindo bugs em 70%",
        ]),
    },
    ExperienceEntry {
        id: "fullstack-dev",
        kind: ExperienceKind::Work,
        title: "Desenvolvedor Fullstack",
        org: "StartupXYZ",
        location: "Austin, TX",
        period: "2020 - 2022",
        description: "Desenvolvi aplicações completas da concepção ao deploy com tecnologias web modernas",
        responsibilities: &[
            "Construí aplicações React escaláveis com TypeScript",
            "Projetei e implementei APIs RESTful",
            "Integrei serviços de terceiros e sistemas de pagamento",
            "Colaborei com designers para implementar interfaces fiéis ao layout com Tailwind CSS",
            "Participei de processos ágeis de desenvolvimento",
        ],
        technologies: &["JavaScript", "TypeScript", "React", "Python", "Django", "MongoDB"],
        achievements: Some(&[
            "Entreguei mais de 15 funcionalidades dentro do prazo",
            "Aumentei o engajamento dos usuários em 35%",
            "Mantive 99,9% de disponibilidade em sistemas críticos",
        ]),
    },
    ExperienceEntry {
        id: "frontend-dev",
        kind: ExperienceKind::Work,
        title: "Desenvolvedor Frontend",
        org: "WebAgency Pro",
        location: "Remoto",
        period: "2019 - 2020",
        description: "Especializado na criação de interfaces responsivas e interativas para projetos de clientes",
        responsibilities: &[
            "Desenvolvi sites responsivos com React e CSS moderno",
            "Colaborei com designers de UX/UI na implementação de interfaces",
            "Otimizei aplicações para desempenho e acessibilidade",
            "Mantive e atualizei bases de código legadas",
        ],
        technologies: &["JavaScript", "React", "CSS3", "HTML5", "Git"],
        achievements: Some(&[
            "Entreguei mais de 20 projetos de clientes com sucesso",
            "Alcancei 98% de satisfação dos clientes",
            "Reduzi o tempo de carregamento das páginas em 50% em média",
        ]),
    },
    ExperienceEntry {
        id: "cs-degree",
        kind: ExperienceKind::Education,
        title: "Bacharelado em Engenharia de Computação",
        org: "CEFET-MG",
        location: "Belo Horizonte, MG",
        period: "Em andamento",
        description: "Fundamentos de engenharia de computação com foco em engenharia de software e sistemas",
        responsibilities: &[
            "Disciplinas de algoritmos, estruturas de dados e engenharia de software",
            "Ênfase em desenvolvimento web e sistemas de banco de dados",
            "Participação em hackathons e competições de programação",
        ],
        technologies: &["C", "Java", "Python", "SQL", "React", "Node.js"],
        achievements: Some(&[
            "Apliquei o conteúdo do curso em projetos freelance web e mobile",
            "Venci um hackathon universitário com um projeto em TypeScript",
        ]),
    },
    ExperienceEntry {
        id: "senai-technician",
        kind: ExperienceKind::Education,
        title: "Técnico em Programação, Jogos Digitais",
        org: "SENAI",
        location: "Belo Horizonte, MG",
        period: "Concluído",
        description: "Curso técnico em programação com especialização em jogos digitais",
        responsibilities: &[
            "Programação em C# e lógica de programação",
            "Métodos ágeis e boas práticas de desenvolvimento",
            "Prática com Unity, Blender, Visual Studio e Maya",
        ],
        technologies: &["C#", "Unity", "Blender", "Visual Studio", "Maya"],
        achievements: None,
    },
    ExperienceEntry {
        id: "aws-cert",
        kind: ExperienceKind::Certification,
        title: "AWS Certified Solutions Architect",
        org: "Amazon Web Services",
        location: "Online",
        period: "2023",
        description: "Certificação profissional que comprova domínio no projeto de sistemas distribuídos na AWS",
        responsibilities: &[
            "Domínio dos serviços essenciais e padrões de arquitetura da AWS",
            "Boas práticas de segurança e escalabilidade",
            "Estratégias de otimização de custos",
        ],
        technologies: &["AWS", "EC2", "S3", "Lambda", "RDS", "CloudFormation"],
        achievements: None,
    },
    ExperienceEntry {
        id: "ts-cert",
        kind: ExperienceKind::Certification,
        title: "Certificação Avançada em TypeScript",
        org: "Microsoft Learn",
        location: "Online",
        period: "2022",
        description: "Certificação avançada em desenvolvimento e boas práticas com TypeScript",
        responsibilities: &[
            "Conceitos avançados do sistema de tipos e programação genérica",
            "Sistemas de módulos e mesclagem de declarações",
            "Integração com frameworks modernos e ferramentas de build",
        ],
        technologies: &["TypeScript", "Node.js", "React", "Webpack"],
        achievements: None,
    },
];
