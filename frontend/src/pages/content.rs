// (title, description, image)
pub const PROGRAMS: &[(&str, &str, &str)] = &[
    (
        "Web Development",
        "Build responsive sites end to end, from semantic markup to deployment.",
        "/assets/programs/web.jpg",
    ),
    (
        "Data Science",
        "Clean, explore and model real datasets with a mentor reviewing every notebook.",
        "/assets/programs/data.jpg",
    ),
    (
        "Embedded Systems",
        "Write firmware for microcontrollers and debug it on real hardware.",
        "/assets/programs/embedded.jpg",
    ),
    (
        "Cloud Operations",
        "Automate infrastructure, monitor services and run incident drills.",
        "/assets/programs/cloud.jpg",
    ),
    (
        "UI/UX Design",
        "Research users, prototype flows and hand off production-ready designs.",
        "/assets/programs/design.jpg",
    ),
];

pub const FALLBACK_IMAGE: &str = "https://placehold.co/600x400/123338/E0E1DD?text=Image";

// (quote, author, role)
pub const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "The mentors treated us like colleagues from the first week.",
        "Aino K.",
        "Web Development intern",
    ),
    (
        "I shipped more real code in eight weeks than in two years of coursework.",
        "Rahul S.",
        "Cloud Operations intern",
    ),
    (
        "Weekly reviews made it obvious what to learn next.",
        "Maria L.",
        "Data Science intern",
    ),
];
