use chrono::Local;
use note_pdf::layout::Paginator;
use note_pdf::{pagesize, Colour, Document, FontPair, Info, In, Margins, NoteStyle, PageGeometry};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("note_pdf=debug")),
        )
        .init();

    let note = format!(
        "Subjective: Patient reports a dry cough for three days.\n\n{}\n\n\
         Objective: Temp 38C, HR 92.\n{}\n\n\
         Assessment: Likely viral upper respiratory infection.\n\n\
         Plan: Rest and fluids.\n{}",
        lipsum::lipsum(300),
        lipsum::lipsum(120),
        lipsum::lipsum(400),
    );

    let geometry = PageGeometry::new(pagesize::A4, Margins::symmetric(In(1.0), In(0.75)));
    let mut style = NoteStyle::new();
    style.title("Visit Summary").footer_label("Printed");
    style.title_colour = Colour::new_rgb_bytes(22, 101, 52);
    style.body_colour = Colour::new_grey(0.15);

    let fonts = FontPair::default();
    let paginator = Paginator::for_fonts(geometry, style, fonts).expect("valid page geometry");

    let mut doc = Document::new(fonts);
    doc.set_info(
        Info::new()
            .title("Visit Summary")
            .author("Triage clinic")
            .subject("Development Test / Example")
            .keywords("soap, demo")
            .clone(),
    );
    paginator
        .paginate(&note, Local::now().naive_local(), &mut doc)
        .expect("can lay out note");

    doc.save("soap-note.pdf").expect("can write soap-note.pdf");
}
