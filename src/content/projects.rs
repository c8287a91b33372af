use super::{ProjectCategory, ProjectEntry};
use crate::i18n::Localized;

const ECOMMERCE_IMAGE: &str = "assets/project-ecommerce.jpg";
const TASK_MANAGER_IMAGE: &str = "assets/project-taskmanager.jpg";
const ANALYTICS_IMAGE: &str = "assets/project-analytics.jpg";

const TASK_MANAGER_IMAGES: &[&str] = &[
    TASK_MANAGER_IMAGE,
    "assets/project-taskmanager-board.jpg",
    "assets/project-taskmanager-timeline.jpg",
];

const ANALYTICS_IMAGES: &[&str] = &[
    ANALYTICS_IMAGE,
    "assets/project-analytics-charts.jpg",
    "assets/project-analytics-reports.jpg",
    "assets/project-analytics-export.jpg",
];

const ECOMMERCE_TECH: &[&str] = &[
    "TypeScript",
    "React",
    "Node.js",
    "PostgreSQL",
    "Tailwind CSS",
    "Stripe",
    "AWS",
];
const TASK_MANAGER_TECH: &[&str] = &[
    "TypeScript",
    "React",
    "Express",
    "Socket.io",
    "MongoDB",
    "Tailwind CSS",
    "Docker",
];
const ANALYTICS_TECH: &[&str] = &[
    "TypeScript",
    "React",
    "D3.js",
    "Python",
    "FastAPI",
    "Redis",
    "Tailwind CSS",
];

/// Showcased projects, one table per language with matching ids and order.
pub static PROJECTS: Localized<&[ProjectEntry]> = Localized::new(PORTUGUESE, ENGLISH);

const ENGLISH: &[ProjectEntry] = &[
    ProjectEntry {
        id: "ecommerce",
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with modern React TypeScript frontend and scalable Node.js backend",
        long_description: "A comprehensive e-commerce platform built with TypeScript for type safety and Tailwind CSS for rapid UI development. Features include product catalog, shopping cart, payment integration, and admin dashboard.",
        technologies: ECOMMERCE_TECH,
        features: &[
            "User authentication with JWT",
            "Product catalog with search and filters",
            "Shopping cart and wishlist functionality",
            "Stripe payment integration",
            "Admin dashboard for inventory management",
            "Real-time order tracking",
        ],
        challenges: &[
            "Implementing type-safe API communication between frontend and backend",
            "Optimizing database queries for product search functionality",
            "Handling concurrent user sessions for cart management",
        ],
        results: &[
            "40% faster development time using TypeScript",
            "99.9% uptime with AWS deployment",
            "Sub-200ms API response times",
        ],
        image: ECOMMERCE_IMAGE,
        images: None,
        repository_url: "https://github.com/example/ecommerce",
        live_url: Some("https://ecommerce-demo.com"),
        demo_url: None,
        category: ProjectCategory::Fullstack,
        icon: "shopping-cart",
    },
    ProjectEntry {
        id: "taskmanager",
        title: "Task Management System",
        description: "Collaborative task management application with real-time updates and team collaboration features",
        long_description: "A powerful task management system built with React TypeScript and styled with Tailwind CSS. Features drag-and-drop functionality, real-time collaboration, and comprehensive project tracking.",
        technologies: TASK_MANAGER_TECH,
        features: &[
            "Drag-and-drop task boards",
            "Real-time collaboration with Socket.io",
            "Team member assignment and notifications",
            "Project timeline and milestone tracking",
            "File attachments and comments",
            "Mobile-responsive design",
        ],
        challenges: &[
            "Implementing real-time updates with TypeScript interfaces",
            "Optimizing drag-and-drop performance with large datasets",
            "Designing responsive layouts with Tailwind CSS",
        ],
        results: &[
            "60% improvement in team productivity",
            "Real-time sync across all devices",
            "Zero data loss with robust error handling",
        ],
        image: TASK_MANAGER_IMAGE,
        images: Some(TASK_MANAGER_IMAGES),
        repository_url: "https://github.com/example/taskmanager",
        live_url: Some("https://taskmanager-demo.com"),
        demo_url: Some("https://demo.taskmanager.com"),
        category: ProjectCategory::Fullstack,
        icon: "check-square",
    },
    ProjectEntry {
        id: "analytics",
        title: "Analytics Dashboard",
        description: "Real-time analytics dashboard with interactive data visualizations and comprehensive reporting",
        long_description: "A sophisticated analytics platform featuring real-time data processing, interactive charts, and automated reporting. Built with TypeScript for reliability and Tailwind CSS for consistent styling.",
        technologies: ANALYTICS_TECH,
        features: &[
            "Real-time data visualization with D3.js",
            "Interactive charts and graphs",
            "Automated report generation",
            "Custom dashboard creation",
            "Data export functionality",
            "Multi-tenant architecture",
        ],
        challenges: &[
            "Processing large datasets with TypeScript type safety",
            "Creating responsive charts with Tailwind CSS",
            "Implementing real-time data streaming",
        ],
        results: &[
            "10x faster data processing",
            "Real-time insights with <100ms latency",
            "Reduced reporting time by 80%",
        ],
        image: ANALYTICS_IMAGE,
        images: Some(ANALYTICS_IMAGES),
        repository_url: "https://github.com/example/analytics",
        live_url: Some("https://analytics-demo.com"),
        demo_url: None,
        category: ProjectCategory::Fullstack,
        icon: "bar-chart",
    },
];

const PORTUGUESE: &[ProjectEntry] = &[
    ProjectEntry {
        id: "ecommerce",
        title: "Plataforma de E-Commerce",
        description: "Solução completa de e-commerce com frontend moderno em React e TypeScript e backend escalável em Node.js",
        long_description: "Uma plataforma de e-commerce abrangente construída com TypeScript para segurança de tipos e Tailwind CSS para desenvolvimento rápido de interfaces. Inclui catálogo de produtos, carrinho de compras, integração de pagamentos e painel administrativo.",
        technologies: ECOMMERCE_TECH,
        features: &[
            "Autenticação de usuários com JWT",
            "Catálogo de produtos com busca e filtros",
            "Carrinho de compras e lista de desejos",
            "Integração de pagamentos com Stripe",
            "Painel administrativo para gestão de estoque",
            "Rastreamento de pedidos em tempo real",
        ],
        challenges: &[
            "Implementar comunicação tipada entre frontend e backend",
            "Otimizar consultas ao banco de dados para a busca de produtos",
            "Lidar com sessões simultâneas na gestão do carrinho",
        ],
        results: &[
            "Desenvolvimento 40% mais rápido com TypeScript",
            "99,9% de disponibilidade com deploy na AWS",
            "Tempo de resposta da API abaixo de 200ms",
        ],
        image: ECOMMERCE_IMAGE,
        images: None,
        repository_url: "https://github.com/example/ecommerce",
        live_url: Some("https://ecommerce-demo.com"),
        demo_url: None,
        category: ProjectCategory::Fullstack,
        icon: "shopping-cart",
    },
    ProjectEntry {
        id: "taskmanager",
        title: "Sistema de Gestão de Tarefas",
        description: "Aplicação colaborativa de gestão de tarefas com atualizações em tempo real e recursos para equipes",
        long_description: "Um sistema de gestão de tarefas construído com React e TypeScript e estilizado com Tailwind CSS. Oferece arrastar e soltar, colaboração em tempo real e acompanhamento completo de projetos.",
        technologies: TASK_MANAGER_TECH,
        features: &[
            "Quadros de tarefas com arrastar e soltar",
            "Colaboração em tempo real com Socket.io",
            "Atribuição de membros e notificações",
            "Linha do tempo e marcos do projeto",
            "Anexos e comentários",
            "Design responsivo para dispositivos móveis",
        ],
        challenges: &[
            "Implementar atualizações em tempo real com interfaces TypeScript",
            "Otimizar o arrastar e soltar com grandes volumes de dados",
            "Criar layouts responsivos com Tailwind CSS",
        ],
        results: &[
            "Aumento de 60% na produtividade da equipe",
            "Sincronização em tempo real entre dispositivos",
            "Nenhuma perda de dados graças ao tratamento robusto de erros",
        ],
        image: TASK_MANAGER_IMAGE,
        images: Some(TASK_MANAGER_IMAGES),
        repository_url: "https://github.com/example/taskmanager",
        live_url: Some("https://taskmanager-demo.com"),
        demo_url: Some("https://demo.taskmanager.com"),
        category: ProjectCategory::Fullstack,
        icon: "check-square",
    },
    ProjectEntry {
        id: "analytics",
        title: "Painel de Análise de Dados",
        description: "Painel de análise em tempo real com visualizações interativas e relatórios completos",
        long_description: "Uma plataforma de análise com processamento de dados em tempo real, gráficos interativos e relatórios automatizados. Construída com TypeScript para confiabilidade e Tailwind CSS para um visual consistente.",
        technologies: ANALYTICS_TECH,
        features: &[
            "Visualização de dados em tempo real com D3.js",
            "Gráficos interativos",
            "Geração automática de relatórios",
            "Criação de painéis personalizados",
            "Exportação de dados",
            "Arquitetura multi-inquilino",
        ],
        challenges: &[
            "Processar grandes volumes de dados com segurança de tipos",
            "Criar gráficos responsivos com Tailwind CSS",
            "Implementar streaming de dados em tempo real",
        ],
        results: &[
            "Processamento de dados 10x mais rápido",
            "Insights em tempo real com latência abaixo de 100ms",
            "Redução de 80% no tempo de geração de relatórios",
        ],
        image: ANALYTICS_IMAGE,
        images: Some(ANALYTICS_IMAGES),
        repository_url: "https://github.com/example/analytics",
        live_url: Some("https://analytics-demo.com"),
        demo_url: None,
        category: ProjectCategory::Fullstack,
        icon: "bar-chart",
    },
];
