//! Resume fixtures shared by the interview tests.

/// Conventional resume with Summary / Skills / Experience / Education headers.
pub const FULL_RESUME: &str = "\
Name: Jordan Smith
Contact: jordan@example.com

Summary:
Experienced software developer who enjoys scalable systems. Strong background in full-stack development.

Skills:
- JavaScript/TypeScript, React, Node.js
- Python, Django, Flask
- AWS, Docker, Kubernetes
- SQL and NoSQL databases

Experience:
Senior Developer at Tech Solutions Inc. (2019-Present)
- Led the development of a microservices architecture that improved system performance by 40%
- Implemented automated testing that reduced bugs in production by 60%
- Mentored junior developers and conducted code reviews

Software Engineer at WebApps Co. (2016-2019)
- Developed and maintained client-facing applications using React
- Collaborated with design team to implement responsive UI components

Education:
B.S. Computer Science, Tech University (2016)
";

/// Minimal three-line resume with inline section content.
pub const COMPACT_RESUME: &str =
    "Skills: Python, React\nExperience: Lead at Acme (2020-2023)\n- improved deploy speed by 50%";

/// Resume with a dedicated Projects section whose entries use `Name: description`.
pub const PROJECTS_RESUME: &str = "\
Technical Skills: Rust, Go, PostgreSQL

Work Experience
Backend Engineer at Ferrous Systems (2021-2024)
- Designed the billing pipeline

Personal Projects:
- Inventory Tracker: desktop app built with Rust and SQLite
- Chess Engine: bitboard move generator with alpha-beta search
- Dotfiles
- Weather Bot: Slack bot reporting daily forecasts
- Recipe Scraper: async crawler for cooking sites

Education
M.S. Computer Science
";
