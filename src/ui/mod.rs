//! Terminal front end — renders the current screen as numbered menus and
//! dispatches each line of input to a controller handler.
//!
//! Rendering is a pure function of controller state; every state change
//! goes through the controller. The loop reads one action, runs it to
//! completion (including any gateway await), then re-renders.

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::domain::{COMMON_INTERESTS, ExpertRequest, StudentProfile, TenthStream, TwelfthStream};
use crate::session::{
    AssessmentScreen, ExpertScreen, Screen, SessionController, TenthScreen, TwelfthScreen,
};

type InputLines = Lines<BufReader<Stdin>>;

/// Run the interactive session until EOF or `/quit`.
pub async fn run(mut controller: SessionController) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render(&controller);
    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        match input.as_str() {
            "/quit" | "/q" => break,
            "/home" => controller.reset(),
            "/back" => controller.back(),
            _ => dispatch(&mut controller, &input, &mut lines).await?,
        }
        render(&controller);
    }

    Ok(())
}

async fn dispatch(
    controller: &mut SessionController,
    input: &str,
    lines: &mut InputLines,
) -> anyhow::Result<()> {
    match controller.screen() {
        Screen::Landing => {
            match parse_choice(input, 5) {
                Some(1) => controller.open_after_tenth(),
                Some(2) => controller.open_after_twelfth(),
                Some(3) => controller.open_assessment(),
                Some(4) => controller.open_job_market(),
                Some(5) => controller.open_expert_contact(),
                _ => print_invalid(),
            }
        }

        Screen::AfterTenth(TenthScreen::StreamPick) => {
            match parse_choice(input, TenthStream::ALL.len()) {
                Some(n) => {
                    busy("Looking up career options...");
                    controller.choose_tenth_stream(TenthStream::ALL[n - 1]).await;
                }
                None => print_invalid(),
            }
        }
        Screen::AfterTenth(TenthScreen::CareerList) => {
            let options = &controller.selection().career_options;
            match parse_choice(input, options.len()) {
                Some(n) => {
                    let career = options[n - 1].career_name.clone();
                    let Some(stream) = controller.selection().tenth_stream else {
                        return Ok(());
                    };
                    busy("Building your roadmap...");
                    controller.choose_tenth_career(&career, stream).await;
                }
                None => print_invalid(),
            }
        }
        Screen::AfterTenth(TenthScreen::CareerPathway) => {
            if parse_choice(input, 1) == Some(1) {
                controller.reset();
            } else {
                print_invalid();
            }
        }

        Screen::AfterTwelfth(TwelfthScreen::StreamPick) => {
            match parse_choice(input, TwelfthStream::ALL.len()) {
                Some(n) => {
                    busy("Looking up course options...");
                    controller
                        .choose_twelfth_stream(TwelfthStream::ALL[n - 1])
                        .await;
                }
                None => print_invalid(),
            }
        }
        Screen::AfterTwelfth(TwelfthScreen::CourseList) => {
            let courses = &controller.selection().course_options;
            match parse_choice(input, courses.len()) {
                Some(n) => {
                    let course = courses[n - 1].clone();
                    controller.choose_course(&course);
                }
                None => print_invalid(),
            }
        }
        Screen::AfterTwelfth(TwelfthScreen::CourseHub) => match parse_choice(input, 2) {
            Some(1) => controller.browse_colleges(),
            Some(2) => {
                busy("Looking up career options...");
                controller.browse_careers().await;
            }
            _ => print_invalid(),
        },
        Screen::AfterTwelfth(TwelfthScreen::ProfileForm) => {
            let marks_10th = input.to_string();
            let Some(marks_12th) = prompt_line(lines, "12th grade marks (percentage or CGPA)").await?
            else {
                return Ok(());
            };
            let Some(achievements) =
                prompt_line(lines, "Achievements (Olympiads, sports, etc.)").await?
            else {
                return Ok(());
            };
            busy("Matching colleges to your profile...");
            controller
                .submit_profile(StudentProfile {
                    marks_10th,
                    marks_12th,
                    achievements,
                })
                .await;
        }
        Screen::AfterTwelfth(TwelfthScreen::CollegeList) => {
            let colleges = &controller.selection().colleges;
            match parse_choice(input, colleges.len()) {
                Some(n) => {
                    let college = colleges[n - 1].college_name.clone();
                    busy("Charting the admission route...");
                    controller.choose_college(&college).await;
                }
                None => print_invalid(),
            }
        }
        Screen::AfterTwelfth(TwelfthScreen::AdmissionPlan)
        | Screen::AfterTwelfth(TwelfthScreen::CareerPathway) => {
            if parse_choice(input, 1) == Some(1) {
                controller.reset();
            } else {
                print_invalid();
            }
        }
        Screen::AfterTwelfth(TwelfthScreen::CareerList) => {
            let options = &controller.selection().career_options;
            match parse_choice(input, options.len()) {
                Some(n) => {
                    let career = options[n - 1].career_name.clone();
                    busy("Building your roadmap...");
                    controller.choose_twelfth_career(&career).await;
                }
                None => print_invalid(),
            }
        }

        Screen::Assessment(AssessmentScreen::ModePick) => match parse_choice(input, 2) {
            Some(1) => controller.pick_interest_mode(),
            Some(2) => {
                busy("Preparing some thought-provoking questions...");
                controller.start_open_ended_quiz().await;
            }
            _ => print_invalid(),
        },
        Screen::Assessment(AssessmentScreen::InterestPick) => {
            if input.eq_ignore_ascii_case("done") {
                busy("Crafting your personalized quiz...");
                controller.submit_interests().await;
            } else {
                match parse_choice(input, COMMON_INTERESTS.len()) {
                    Some(n) => controller.toggle_interest(COMMON_INTERESTS[n - 1]),
                    None => print_invalid(),
                }
            }
        }
        Screen::Assessment(AssessmentScreen::Question) => {
            let Some(question) = controller.assessment().current_question() else {
                return Ok(());
            };
            match parse_choice(input, question.options.len()) {
                Some(n) => {
                    let answer = question.options[n - 1].clone();
                    let last = controller.assessment().current_index + 1
                        == controller.assessment().questions.len();
                    if last {
                        busy("Analyzing your unique thinking style...");
                    }
                    controller.answer_question(&answer).await;
                }
                None => print_invalid(),
            }
        }
        Screen::Assessment(AssessmentScreen::Result) => {
            let Some(result) = controller.assessment().result.as_ref() else {
                return Ok(());
            };
            let streams = result.suggested_streams.clone();
            let careers: Vec<String> = result
                .suggested_careers
                .iter()
                .map(|c| c.career_name.clone())
                .collect();
            match parse_choice(input, streams.len() + careers.len() + 1) {
                Some(n) if n <= streams.len() => {
                    busy("Looking up career options...");
                    controller.choose_tenth_stream(streams[n - 1]).await;
                }
                Some(n) if n <= streams.len() + careers.len() => {
                    busy("Building your roadmap...");
                    controller
                        .choose_suggested_career(&careers[n - 1 - streams.len()])
                        .await;
                }
                Some(_) => controller.reset(),
                None => print_invalid(),
            }
        }

        Screen::ExpertContact(ExpertScreen::Form) => {
            let full_name = input.to_string();
            let Some(email) = prompt_line(lines, "Email address").await? else {
                return Ok(());
            };
            let Some(topic) = prompt_line(lines, "What would you like to discuss?").await? else {
                return Ok(());
            };
            busy("Sending your request...");
            controller
                .submit_expert_request(ExpertRequest {
                    full_name,
                    email,
                    topic,
                })
                .await;
        }
        Screen::ExpertContact(ExpertScreen::Confirmation) => {
            if parse_choice(input, 1) == Some(1) {
                controller.reset();
            } else {
                print_invalid();
            }
        }

        Screen::JobMarket => {
            busy(&format!("Analyzing market for {input}..."));
            controller.analyze_job_market(input).await;
        }
    }

    Ok(())
}

fn render(controller: &SessionController) {
    println!();
    if let Some(error) = controller.error() {
        println!("⚠️  {error}\n");
    }

    match controller.screen() {
        Screen::Landing => {
            println!("🎓 Navigate Your Future");
            println!("AI-powered guidance for careers, colleges, and skills.\n");
            println!("  1. Guidance after 10th — explore careers by subject stream");
            println!("  2. Guidance after 12th — discover courses and colleges");
            println!("  3. Skills assessment — find your strengths");
            println!("  4. Job market analysis — demand and skills for any role");
            println!("  5. Talk to an expert — schedule a mock session");
            println!("\nType a number. /back, /home, /quit work anywhere.");
        }

        Screen::AfterTenth(TenthScreen::StreamPick) => {
            println!("Guidance After 10th Grade");
            println!("Choose the subject stream you plan to take in 11th & 12th:\n");
            print_numbered(TenthStream::ALL.iter().map(|s| s.label()));
        }
        Screen::AfterTenth(TenthScreen::CareerList) => {
            if let Some(stream) = controller.selection().tenth_stream {
                println!("Career Options for {stream}\n");
            }
            for (i, option) in controller.selection().career_options.iter().enumerate() {
                println!(
                    "  {}. {} [{}]\n     {}",
                    i + 1,
                    option.career_name,
                    option.estimated_salary_potential,
                    option.description
                );
            }
        }
        Screen::AfterTenth(TenthScreen::CareerPathway) => {
            let selection = controller.selection();
            if let (Some(career), Some(stream)) =
                (&selection.selected_career, selection.tenth_stream)
            {
                println!("Pathway to: {career}");
                println!("Based on your choice of {stream}\n");
            }
            println!("{}\n", selection.pathway);
            println!("  1. Start over");
        }

        Screen::AfterTwelfth(TwelfthScreen::StreamPick) => {
            println!("Guidance After 12th Grade");
            println!("Select your 12th grade subject stream:\n");
            print_numbered(TwelfthStream::ALL.iter().map(|s| s.label()));
        }
        Screen::AfterTwelfth(TwelfthScreen::CourseList) => {
            if let Some(stream) = controller.selection().twelfth_stream {
                println!("Course Options for {stream}\n");
            }
            print_numbered(controller.selection().course_options.iter().map(String::as_str));
        }
        Screen::AfterTwelfth(TwelfthScreen::CourseHub) => {
            if let Some(course) = &controller.selection().selected_course {
                println!("You've selected: {course}");
            }
            println!("What would you like to explore next?\n");
            println!("  1. Find best colleges");
            println!("  2. Find career options");
        }
        Screen::AfterTwelfth(TwelfthScreen::ProfileForm) => {
            println!("Find Best Colleges");
            println!("Enter your details for personalized suggestions.\n");
            println!("10th grade marks (percentage or CGPA):");
        }
        Screen::AfterTwelfth(TwelfthScreen::CollegeList) => {
            if let Some(course) = &controller.selection().selected_course {
                println!("College Suggestions for {course}\n");
            }
            for (i, college) in controller.selection().colleges.iter().enumerate() {
                println!(
                    "  {}. {} [{}]\n     {} — {}",
                    i + 1,
                    college.college_name,
                    college.tier,
                    college.location,
                    college.reason
                );
            }
        }
        Screen::AfterTwelfth(TwelfthScreen::AdmissionPlan) => {
            let selection = controller.selection();
            if let (Some(college), Some(course)) =
                (&selection.selected_college, &selection.selected_course)
            {
                println!("Admission Pathway for {college}");
                println!("For the {course} program.\n");
            }
            println!("{}\n", selection.pathway);
            println!("  1. Start over");
        }
        Screen::AfterTwelfth(TwelfthScreen::CareerList) => {
            if let Some(course) = &controller.selection().selected_course {
                println!("Career Options After {course}\n");
            }
            for (i, option) in controller.selection().career_options.iter().enumerate() {
                println!(
                    "  {}. {} [{}]\n     {}",
                    i + 1,
                    option.career_name,
                    option.estimated_salary_potential,
                    option.description
                );
            }
        }
        Screen::AfterTwelfth(TwelfthScreen::CareerPathway) => {
            let selection = controller.selection();
            if let (Some(career), Some(course)) =
                (&selection.selected_career, &selection.selected_course)
            {
                println!("Pathway to: {career}");
                println!("After completing {course}\n");
            }
            println!("{}\n", selection.pathway);
            println!("  1. Start over");
        }

        Screen::Assessment(AssessmentScreen::ModePick) => {
            println!("Skills Assessment");
            println!("How are you feeling about your future path?\n");
            println!("  1. I have a few interests");
            println!("  2. I'm really confused");
        }
        Screen::Assessment(AssessmentScreen::InterestPick) => {
            println!("Personalize Your Assessment");
            println!("Toggle a few topics you're interested in, then type 'done'.\n");
            let selected = &controller.assessment().interests;
            for (i, tag) in COMMON_INTERESTS.iter().enumerate() {
                let mark = if selected.iter().any(|t| t == tag) {
                    "x"
                } else {
                    " "
                };
                println!("  {}. [{mark}] {tag}", i + 1);
            }
        }
        Screen::Assessment(AssessmentScreen::Question) => {
            let assessment = controller.assessment();
            if let Some(question) = assessment.current_question() {
                println!(
                    "Question {}/{}",
                    assessment.current_index + 1,
                    assessment.questions.len()
                );
                println!("{}\n", question.question);
                print_numbered(question.options.iter().map(String::as_str));
            }
        }
        Screen::Assessment(AssessmentScreen::Result) => {
            if let Some(result) = &controller.assessment().result {
                println!("Assessment Complete!");
                println!("{}\n", result.summary);

                let mut index = 0;
                println!("Suggested subject streams:");
                for stream in &result.suggested_streams {
                    index += 1;
                    println!("  {index}. {stream}");
                }
                println!("\nSuggested career paths:");
                for career in &result.suggested_careers {
                    index += 1;
                    println!(
                        "  {}. {} [{}] — {}",
                        index,
                        career.career_name,
                        career.estimated_salary_potential,
                        career.description
                    );
                }
                println!("\n  {}. Back to home", index + 1);
            }
        }

        Screen::ExpertContact(ExpertScreen::Form) => {
            println!("Talk to a Career Expert");
            println!("Fill out the form to schedule a mock consultation.\n");
            println!("Full name:");
        }
        Screen::ExpertContact(ExpertScreen::Confirmation) => {
            println!("✅ Request sent!");
            println!("Our expert will get back to you shortly. Thank you for using Career Compass!\n");
            println!("  1. Back to home");
        }

        Screen::JobMarket => {
            println!("Job Market Analysis");
            if let Some(report) = &controller.job_market().report {
                println!("\n{}", controller.job_market().query);
                println!("{}\n", report.summary);
                println!("  Market demand: {}", report.demand);
                println!("  Salary trends: {}", report.salary_trends);
                println!("  Essential skills: {}", report.required_skills.join(", "));
                println!("\nEnter another career or skill to analyze, or /back.");
            } else {
                println!("Enter a career or skill to get the latest market insights.");
            }
        }
    }
}

async fn prompt_line(lines: &mut InputLines, label: &str) -> anyhow::Result<Option<String>> {
    println!("{label}:");
    eprint!("> ");
    Ok(lines.next_line().await?.map(|l| l.trim().to_string()))
}

fn print_numbered<'a>(items: impl Iterator<Item = &'a str>) {
    for (i, item) in items.enumerate() {
        println!("  {}. {item}", i + 1);
    }
}

fn busy(message: &str) {
    eprintln!("⏳ {message}");
}

fn print_invalid() {
    eprintln!("Please enter one of the listed numbers.");
}

/// Parse a 1-based menu choice, rejecting anything out of range.
fn parse_choice(input: &str, max: usize) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= max => Some(n),
        _ => None,
    }
}
