use crate::model::{Contact, Credential, Education, Experience, Icon, Portfolio, Profile, Project, SkillCategory, SocialLink};

pub const PROFILE: Profile = Profile {
    name: "Turgay Ceylan",
    role: "Full Stack Developer",
    tagline: "WordPress Plugin & Theme Developer since 2010. Experienced in front-end and full-stack development \
              with expertise in JavaScript, ASP.NET, Java, and modern web technologies.",
    site: "turgay.io",
    email: "turgay@turgayceylan.com",
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/trgcyln",
            icon: Icon::GitHub,
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/trgcyln/",
            icon: Icon::LinkedIn,
        },
        SocialLink {
            label: "HackerRank",
            href: "https://www.hackerrank.com/trgcyln",
            icon: Icon::HackerRank,
        },
    ],
};

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Be Connected",
        role: "Full Stack Developer",
        description: "Procurement Management/Insights for Public and Private Sector based on ASP.NET Web Forms - \
                      Front-End & Back-End Development",
        technologies: &[
            "DevExpress Bootstrap Controls",
            "Metronic UI Components",
            "Redis In-Memory Storage",
            "Entity Framework 6.0",
            "amCharts",
        ],
        achievements: None,
    },
    Experience {
        company: "Moneta",
        role: "Front-End Developer",
        description: "Project Management & Issue Tracking based on ASP.NET MVC 5 - Front-End Development",
        technologies: &["ASP.NET MVC 5", "JavaScript", "CSS"],
        achievements: None,
    },
    Experience {
        company: "Celebi",
        role: "Android Developer",
        description: "Android Navigation App - Traffic based navigation system which benefits 4G networking and \
                      interacts with the main servers and interprets real time & predicted data.",
        technologies: &["Android", "Java", "4G Networking", "Real-time Data"],
        achievements: Some(&[
            "Project Support from Ministry of Science, Industry and Technology, Republic of Turkey",
            "Project Support from Small and Medium Enterprises Development Organization",
            "Partnership with BlackBerry Turkey on HTML5 based Navigation App",
        ]),
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &["JavaScript", "HTML5", "CSS & LESS", "jQuery"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["C#", "ASP.NET MVC", "Entity Framework", "Java", "J2EE", "EJB & JSP", "PHP"],
    },
    SkillCategory {
        title: "Databases",
        skills: &["MSSQL", "MySQL", "Oracle 11g", "Redis"],
    },
    SkillCategory {
        title: "DevOps & Tools",
        skills: &[
            "Ubuntu 16.04 - 22.04",
            "Nginx",
            "Windows Server 2016-2022",
            "Hyper-V",
            "Docker",
            "Git",
        ],
    },
    SkillCategory {
        title: "Other",
        skills: &[
            "PrimeFaces",
            "Tomcat",
            "C",
            "Scheme & Prolog",
            "Visual Studio",
            "VS Code",
            "Sublime",
            "Figma",
            "WordPress",
        ],
    },
];

pub const CREDENTIALS: &[Credential] = &[
    Credential {
        title: "WordPress Plugin & Theme Developer",
        period: "2010 - Present",
    },
    Credential {
        title: "Front-End Developer",
        period: "2010 - Present",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        title: "University Courses",
        courses: &[
            "Adv. Java",
            "SOA Concepts",
            "TCP/IP Networking",
            "Linux System Administration",
            "C# & ASP.NET",
            "OOP Analysis & Design using UML",
            "Mobile App Development in Android",
        ],
        project: Project {
            title: "Android Navigation Application",
            description: "Android Navigation Application which uses web services to get live & predicted traffic \
                          information",
            link: None,
        },
    },
    Education {
        title: "Computer Science Fundamentals",
        courses: &[
            "Operating Systems",
            "Data Structures and Algorithms",
            "Computer Organization and Design",
            "OOP with Java",
            "Software Engineering",
            "Computer Networks",
            "Principles of Programming Languages",
            "Human Computer Interaction",
        ],
        project: Project {
            title: "Istanbul's Journey Planner",
            description: "Similar to Transport for London journey planning system",
            link: Some("https://tfl.gov.uk/plan-a-journey/"),
        },
    },
];

pub const REFERENCES_NOTE: &str = "Professional references available upon request.";

pub const CONTACTS: &[Contact] = &[
    Contact {
        label: "Website",
        value: "turgay.io",
        href: "https://turgay.io/",
        icon: Icon::ExternalLink,
    },
    Contact {
        label: "GitHub",
        value: "github.com/trgcyln",
        href: "https://github.com/trgcyln",
        icon: Icon::GitHub,
    },
    Contact {
        label: "HackerRank",
        value: "hackerrank.com/trgcyln",
        href: "https://www.hackerrank.com/trgcyln",
        icon: Icon::HackerRank,
    },
    Contact {
        label: "Freelancer",
        value: "freelancer.com/u/gordack",
        href: "https://www.freelancer.com/u/gordack",
        icon: Icon::ExternalLink,
    },
    Contact {
        label: "LinkedIn",
        value: "linkedin.com/in/trgcyln",
        href: "https://www.linkedin.com/in/trgcyln/",
        icon: Icon::LinkedIn,
    },
    Contact {
        label: "Email",
        value: "turgay@turgayceylan.com",
        href: "mailto:turgay@turgayceylan.com",
        icon: Icon::Mail,
    },
];

/// Bundles every section's data for renderers and the JSON export.
pub const fn portfolio() -> Portfolio {
    Portfolio {
        profile: PROFILE,
        experiences: EXPERIENCES,
        skill_categories: SKILL_CATEGORIES,
        credentials: CREDENTIALS,
        education: EDUCATION,
        references_note: REFERENCES_NOTE,
        contacts: CONTACTS,
    }
}
