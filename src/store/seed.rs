use crate::models::Activity;
use crate::store::Catalog;

/// The fixed Mergington High School catalog loaded at startup.
///
/// Rosters listed here are the pre-registered participants; everything else
/// arrives through signups while the process runs.
pub fn default_catalog() -> Catalog {
    let entry = |name: &str, description: &str, schedule: &str, max: u32, roster: &[&str]| {
        (
            name.to_string(),
            Activity::new(
                description,
                schedule,
                max,
                roster.iter().map(|s| s.to_string()).collect(),
            ),
        )
    };

    Catalog::new(vec![
        entry(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        entry(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        entry(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        entry(
            "Basketball",
            "Practice drills and play friendly matches in the school gym",
            "Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &[],
        ),
        entry(
            "Tennis Club",
            "Coached tennis sessions for all skill levels",
            "Saturdays, 10:00 AM - 12:00 PM",
            8,
            &["liam@mergington.edu"],
        ),
        entry(
            "Art Studio",
            "Painting, drawing and mixed media projects",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        entry(
            "Science Club",
            "Hands-on experiments and science fair preparation",
            "Tuesdays, 4:00 PM - 5:30 PM",
            18,
            &["ethan@mergington.edu"],
        ),
        entry(
            "Drama Club",
            "Acting workshops and the spring stage production",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            25,
            &["mia@mergington.edu", "noah@mergington.edu"],
        ),
        entry(
            "Math Olympiad",
            "Problem solving training and competition preparation",
            "Fridays, 4:00 PM - 5:30 PM",
            10,
            &["ava@mergington.edu"],
        ),
    ])
}
