use eframe::egui::{ScrollArea, Ui};

// ---------------------------------------------------------------------------
// Goal descriptions page
// ---------------------------------------------------------------------------

struct GoalInfo {
    label: &'static str,
    summary: &'static str,
    link: &'static str,
}

const GOALS: [GoalInfo; 17] = [
    GoalInfo {
        label: "Goal 1 — No Poverty",
        summary: "End poverty in all its forms everywhere",
        link: "https://sdgs.un.org/goals/goal1",
    },
    GoalInfo {
        label: "Goal 2 — Zero Hunger",
        summary: "End hunger, achieve food security and improved nutrition, and promote sustainable agriculture",
        link: "https://sdgs.un.org/goals/goal2",
    },
    GoalInfo {
        label: "Goal 3 — Good Health & Well-being",
        summary: "Ensure healthy lives and promote well-being for all at all ages",
        link: "https://sdgs.un.org/goals/goal3",
    },
    GoalInfo {
        label: "Goal 4 — Quality Education",
        summary: "Ensure inclusive and equitable quality education and promote lifelong learning opportunities for all",
        link: "https://sdgs.un.org/goals/goal4",
    },
    GoalInfo {
        label: "Goal 5 — Gender Equality",
        summary: "Achieve gender equality and empower all women and girls",
        link: "https://sdgs.un.org/goals/goal5",
    },
    GoalInfo {
        label: "Goal 6 — Clean Water & Sanitation",
        summary: "Ensure availability and sustainable management of water and sanitation for all",
        link: "https://sdgs.un.org/goals/goal6",
    },
    GoalInfo {
        label: "Goal 7 — Affordable & Clean Energy",
        summary: "Ensure access to affordable, reliable, sustainable and modern energy for all",
        link: "https://sdgs.un.org/goals/goal7",
    },
    GoalInfo {
        label: "Goal 8 — Decent Work & Economic Growth",
        summary: "Promote sustained, inclusive and sustainable economic growth, full and productive employment and decent work for all",
        link: "https://sdgs.un.org/goals/goal8",
    },
    GoalInfo {
        label: "Goal 9 — Industry, Innovation & Infrastructure",
        summary: "Build resilient infrastructure, promote inclusive and sustainable industrialization and foster innovation",
        link: "https://sdgs.un.org/goals/goal9",
    },
    GoalInfo {
        label: "Goal 10 — Reduced Inequalities",
        summary: "Reduce inequality within and among countries",
        link: "https://sdgs.un.org/goals/goal10",
    },
    GoalInfo {
        label: "Goal 11 — Sustainable Cities & Communities",
        summary: "Make cities and human settlements inclusive, safe, resilient and sustainable",
        link: "https://sdgs.un.org/goals/goal11",
    },
    GoalInfo {
        label: "Goal 12 — Responsible Consumption & Production",
        summary: "Ensure sustainable consumption and production patterns",
        link: "https://sdgs.un.org/goals/goal12",
    },
    GoalInfo {
        label: "Goal 13 — Climate Action",
        summary: "Take urgent action to combat climate change and its impacts",
        link: "https://sdgs.un.org/goals/goal13",
    },
    GoalInfo {
        label: "Goal 14 — Life Below Water",
        summary: "Conserve and sustainably use the oceans, seas and marine resources",
        link: "https://sdgs.un.org/goals/goal14",
    },
    GoalInfo {
        label: "Goal 15 — Life on Land",
        summary: "Protect, restore and promote sustainable use of terrestrial ecosystems",
        link: "https://sdgs.un.org/goals/goal15",
    },
    GoalInfo {
        label: "Goal 16 — Peace, Justice & Strong Institutions",
        summary: "Promote peaceful and inclusive societies, provide access to justice for all, and build effective institutions",
        link: "https://sdgs.un.org/goals/goal16",
    },
    GoalInfo {
        label: "Goal 17 — Partnerships for the Goals",
        summary: "Strengthen the means of implementation and revitalize the global partnership for sustainable development",
        link: "https://sdgs.un.org/goals/goal17",
    },
];

const COLUMNS: usize = 3;

pub fn show(ui: &mut Ui) {
    ui.heading("Feature Description");
    ui.label("Hover over a goal to read its full description; click to open the official SDG page.");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for chunk in GOALS.chunks(COLUMNS) {
                ui.columns(COLUMNS, |cols| {
                    for (col, goal) in cols.iter_mut().zip(chunk) {
                        col.hyperlink_to(goal.label, goal.link)
                            .on_hover_text(goal.summary);
                    }
                });
                ui.add_space(10.0);
            }
        });
}
