use color_eyre::eyre;
use pdf_assemble::{common::MediaBox, BuiltinFont, Document, DrawCommand, Page};

pub fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let mut doc = Document::new(MediaBox::A4);

    let lines = [
        (BuiltinFont::Bold, 19.0, "Hello World!"),
        (BuiltinFont::Oblique, 10.0, "Set in the standard fonts (no embedding)"),
        (BuiltinFont::Regular, 10.0, "Parentheses (like these) and back\\slashes are escaped."),
        (BuiltinFont::Monospace, 9.4, "fn main() { println!(\"hello\"); }"),
    ];

    let mut y = 800.0;
    for (font, size, text) in lines.iter() {
        doc.pages[0].commands.push(DrawCommand {
            x: 48.0,
            y,
            text: String::from(*text),
            font: *font,
            size: *size,
        });
        y -= 24.0;
    }

    let mut second = Page::new();
    second.commands.push(DrawCommand {
        x: 48.0,
        y: 800.0,
        text: String::from("Page two"),
        font: BuiltinFont::Regular,
        size: 10.0,
    });
    doc.pages.push(second);

    let stdout = std::io::stdout();
    let mut stdolock = stdout.lock();
    doc.write(&mut stdolock)?;

    Ok(())
}
