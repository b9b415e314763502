//! Narrative copy for the six floors, in storage order (foundation first).

use shared::domain::{BaselineNarrative, IconRef, Layer, LayerId, TargetNarrative, VisualHandle};

pub const STANDARD_LAYERS: [Layer; 6] = [
    Layer {
        id: LayerId("foundation"),
        title: "Foundation",
        icon: IconRef("brick-wall"),
        analogy: "The Great Fire of Hamburg (1842)",
        software_title: "Core Infrastructure",
        historical_note: Some(
            "Hamburg lacked fire safety standards, making disaster inevitable. Modern software is a \"digital bonfire\" waiting for a spark.",
        ),
        baseline: BaselineNarrative {
            problem_statement: "In 1842, a quarter of Hamburg burned to the ground because the city was built on mud with wooden stakes. Today, developers repeatedly implement their own authentication, file upload handlers, and logging systems for every new project. These custom solutions are brittle, untested, and riddled with vulnerabilities.",
            action_plan: "Stop \"rolling your own\" crypto and auth. Adopt standardized, secure-by-design frameworks (like hardened Auth0/NextAuth, AWS Cognito, or framework-native security) that act as the certified concrete foundation. Security must be a default, not a plugin.",
        },
        target: TargetNarrative {
            standard_statement: "We use \"Universal Blueprints\"—standardized, secure-by-design frameworks that handle the heavy lifting. We do not forge our own nails; we do not build our own crypto systems. A solid, certified foundation is laid before the first line of business logic is written.",
            retrospective: "By 2030, writing custom authentication code became a liability that no insurer would cover. The industry moved to ISO-standardized infrastructure foundations, virtually eliminating SQL injection and session hijacking from the common bug list.",
        },
        visual_baseline: VisualHandle("foundation/rotten-stilts"),
        visual_target: VisualHandle("foundation/reinforced-concrete"),
    },
    Layer {
        id: LayerId("utilities"),
        title: "Utilities & Wiring",
        icon: IconRef("zap"),
        analogy: "Early 1900s Electricity",
        software_title: "Integration Hell",
        historical_note: Some(
            "Standardization of the electrical grid drove the 2nd Industrial Revolution. Software is still waiting for its grid.",
        ),
        baseline: BaselineNarrative {
            problem_statement: "Before standardization, electrical sockets were a mess. Software is currently in \"Adapter Hell\". APIs lack consistent patterns. Developers spend half their time writing \"glue code\"—a rat's nest of wires—just to connect a logging service to an error tracker.",
            action_plan: "Adopt the \"Universal Plug\" strategy. Implement OpenTelemetry for all logging and metrics immediately. Refuse to use libraries that do not conform to standard interfaces. Standardize error formats (RFC 7807) across all services.",
        },
        target: TargetNarrative {
            standard_statement: "We utilize the \"Universal Plug\"—standardized, language-agnostic APIs (Unix sockets, OpenTelemetry, standard JSON schemas) for common utilities. Logging, monitoring, and security scanning are as simple as plugging a toaster into a wall.",
            retrospective: "The \"Great Standardization\" of the late 20s unified observability. Glue code vanished as services began emitting standard OTel signals by default. The \"Integration Team\" was deprecated as systems simply fit together.",
        },
        visual_baseline: VisualHandle("utilities/tangled-wiring"),
        visual_target: VisualHandle("utilities/clean-conduit"),
    },
    Layer {
        id: LayerId("structure"),
        title: "Structure",
        icon: IconRef("construction"),
        analogy: "Pre-Industrial Handcrafting",
        software_title: "Bespoke Bonfires",
        historical_note: Some(
            "The shift from craftsmanship to industrialization created the modern world. Software is still in the \"Guild\" phase.",
        ),
        baseline: BaselineNarrative {
            problem_statement: "We craft every house by hand using wood and nails. There are no blueprints, just \"it works on my machine\". The structure is flammable and weak. We prioritize speed over stability, building shacks that collapse under technical debt.",
            action_plan: "Move to \"Steel Beams\". Enforce automated memory safety (Rust, Go, or strict runtime checks). Make static analysis and linting a mandatory, unbreakable step in CI/CD. Treat warnings as errors. No \"it works for me\" excuses.",
        },
        target: TargetNarrative {
            standard_statement: "We mass-produce reliability using \"Steel Beams and Rivets\". Automated memory management, strict static analysis, and proven design patterns form a structure built to last—scalable, fireproof, and modular.",
            retrospective: "We stopped treating code as individual art and started treating it as civil engineering. The \"Guild of Handcrafters\" dissolved, replaced by automated fabrication pipelines that ensured structural integrity before deployment.",
        },
        visual_baseline: VisualHandle("structure/wooden-framing"),
        visual_target: VisualHandle("structure/steel-trusses"),
    },
    Layer {
        id: LayerId("facade"),
        title: "The Facade",
        icon: IconRef("paintbrush"),
        analogy: "The Movie Set",
        software_title: "Style Over Substance",
        historical_note: Some(
            "Potemkin villages were fake settlements built to impress officials. Much of modern software is a digital Potemkin village.",
        ),
        baseline: BaselineNarrative {
            problem_statement: "The \"Wild West Saloon\" of software: a fancy painted wooden front hiding a rotting shack. We sell features, animations, and dark mode to distract from a crumbling backend. Security and maintainability are ignored until the breach happens.",
            action_plan: "Implement \"Transparent Engineering\". Dashboard the health of the backend for everyone to see. Tie bonuses to system uptime and security scores, not just shipped features. Don't paint the wall until the drywall is inspected.",
        },
        target: TargetNarrative {
            standard_statement: "Form follows function. The UI is an interface to a robust machine, not a mask. We do not hide the engine because the engine is a masterpiece. Inspectors check the \"Digital Bridge\" beneath the shiny exterior.",
            retrospective: "In the late 20s, the \"Facade Crash\" occurred where major startups failed due to UI-masked rot. Investors demanded \"Structural Audits\" before funding. Aesthetics became a signal of quality, not a distraction from it.",
        },
        visual_baseline: VisualHandle("facade/painted-front"),
        visual_target: VisualHandle("facade/glass-curtain-wall"),
    },
    Layer {
        id: LayerId("safety"),
        title: "Safety & Standards",
        icon: IconRef("siren"),
        analogy: "Inspectors & Firefighters",
        software_title: "Specialized Roles",
        historical_note: Some(
            "In the 19th century, after too many bridges collapsed, Civil Engineering was born. Software needs its own Civil Engineers.",
        ),
        baseline: BaselineNarrative {
            problem_statement: "Developers are forced to be architects, builders, and inspectors all in one. Failures are patched silently in the night. There are no \"Digital Firefighters\" funded to safeguard critical infrastructure, and no accountability.",
            action_plan: "Create \"System Inspector\" roles independent of product delivery. Fund \"Digital Firefighters\" for critical open-source dependencies. Conduct public post-mortems for failures, focusing on systemic fixes rather than blame.",
        },
        target: TargetNarrative {
            standard_statement: "We have specialized roles. \"System Inspectors\" audit software for security and scalability before deployment. \"Digital Firefighters\" are publicly funded institutions safeguarding the grid. Accountability is transparent and systemic.",
            retrospective: "We professionalized. \"Software Civil Engineering\" became a licensed degree. Independent inspectors now sign off on architectures before they go live, much like city building permits.",
        },
        visual_baseline: VisualHandle("safety/no-permit"),
        visual_target: VisualHandle("safety/fire-suppression"),
    },
    Layer {
        id: LayerId("reality_check"),
        title: "The Reality Check",
        icon: IconRef("eye"),
        analogy: "Self-Discovery",
        software_title: "The Mirror",
        historical_note: Some(
            "The First Industrial Revolution didn't just happen; it required a fundamental shift in mindset. We are at that threshold.",
        ),
        baseline: BaselineNarrative {
            problem_statement: "It is 2026. AI copilots write code faster than ever, amplifying our mistakes because the foundation is weak. We are using 21st-century tools to build 19th-century wooden shacks. We are still the cowboys.",
            action_plan: "Admit we have a problem. Use AI to enforce architectural standards, not just to generate boilerplate. Teach juniors \"City Planning\" (Architecture), not just \"Brick Laying\" (Syntax).",
        },
        target: TargetNarrative {
            standard_statement: "It is not about writing more code; it is about writing *less* code by using proven standards. We build resilient, scalable systems that stand the test of time. We stopped building bonfires and started building cathedrals.",
            retrospective: "We realized AI was the steam engine—powerful, but dangerous without rails. Once we laid the tracks of standardization and safety, AI productivity skyrocketed, building safe digital cities instead of bigger bonfires.",
        },
        visual_baseline: VisualHandle("reality_check/unstable-core"),
        visual_target: VisualHandle("reality_check/optimized-core"),
    },
];
