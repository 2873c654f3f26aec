//! Package writer: serializes a [`Presentation`] into a PPTX (OPC zip) file
//!
//! Layout of the package:
//! - `[Content_Types].xml`, `_rels/.rels`, `docProps/core.xml`
//! - `ppt/presentation.xml` plus its relationships
//! - one slide master, one blank layout, one theme
//! - `ppt/slides/slideN.xml` with per-slide relationships
//! - `ppt/media/imageN.png`, one entry per distinct picture file

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use zip::write::{SimpleFileOptions, ZipWriter};

use super::parts::{self, Relationship, ct, escape_xml, rel};
use super::{DeckError, Frame, Paragraph, Presentation, Shape, Slide, hundredths, inches};

/// First slide id allowed by PresentationML
const FIRST_SLIDE_ID: usize = 256;

/// Distinct picture files in first-use order
#[derive(Debug, Default)]
struct MediaTable {
    files: Vec<PathBuf>,
    index: HashMap<PathBuf, usize>,
}

impl MediaTable {
    fn collect(presentation: &Presentation) -> Self {
        let mut table = Self::default();
        for path in presentation.slides.iter().flat_map(Slide::pictures) {
            if !table.index.contains_key(path) {
                table.index.insert(path.to_path_buf(), table.files.len());
                table.files.push(path.to_path_buf());
            }
        }
        table
    }

    /// Package-relative media file name for `path`
    fn name_of(&self, path: &Path) -> Option<String> {
        self.index.get(path).map(|i| format!("image{}.png", i + 1))
    }
}

/// Writes presentations as PPTX packages
pub struct PackageWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
}

impl PackageWriter<std::io::BufWriter<std::fs::File>> {
    /// Write `presentation` to `path`, replacing any existing file
    pub fn save(presentation: &Presentation, title: &str, path: &Path) -> Result<(), DeckError> {
        let file = std::fs::File::create(path)?;
        let mut writer = PackageWriter::new(std::io::BufWriter::new(file));
        writer.write_presentation(presentation, title)?;
        let mut inner = writer.finish()?;
        inner.flush()?;
        log::info!(
            "Wrote {} ({} slides)",
            path.display(),
            presentation.slide_count()
        );
        Ok(())
    }
}

impl<W: Write + Seek> PackageWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
        }
    }

    fn add(&mut self, name: &str, content: &[u8]) -> Result<(), DeckError> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip.start_file(name, options)?;
        self.zip.write_all(content)?;
        Ok(())
    }

    /// Write every part of `presentation`
    pub fn write_presentation(
        &mut self,
        presentation: &Presentation,
        title: &str,
    ) -> Result<(), DeckError> {
        let media = MediaTable::collect(presentation);
        let slide_count = presentation.slides.len();

        let mut overrides = vec![
            ("/ppt/presentation.xml".to_string(), ct::PRESENTATION),
            ("/ppt/slideMasters/slideMaster1.xml".to_string(), ct::SLIDE_MASTER),
            ("/ppt/slideLayouts/slideLayout1.xml".to_string(), ct::SLIDE_LAYOUT),
            ("/ppt/theme/theme1.xml".to_string(), ct::THEME),
            ("/docProps/core.xml".to_string(), ct::CORE_PROPERTIES),
        ];
        overrides.extend(
            (1..=slide_count).map(|n| (format!("/ppt/slides/slide{n}.xml"), ct::SLIDE)),
        );
        self.add("[Content_Types].xml", parts::content_types_xml(&overrides)?.as_bytes())?;

        let package_rels = [
            Relationship::new("rId1", rel::OFFICE_DOCUMENT, "ppt/presentation.xml"),
            Relationship::new("rId2", rel::CORE_PROPERTIES, "docProps/core.xml"),
        ];
        self.add("_rels/.rels", parts::relationships_xml(&package_rels)?.as_bytes())?;
        self.add(
            "docProps/core.xml",
            parts::core_properties_xml(title, &chrono::Utc::now())?.as_bytes(),
        )?;

        // rId1 master, rId2..=rId(n+1) slides, then the theme
        let mut pres_rels = vec![Relationship::new(
            "rId1",
            rel::SLIDE_MASTER,
            "slideMasters/slideMaster1.xml",
        )];
        pres_rels.extend((1..=slide_count).map(|n| {
            Relationship::new(format!("rId{}", n + 1), rel::SLIDE, format!("slides/slide{n}.xml"))
        }));
        pres_rels.push(Relationship::new(
            format!("rId{}", slide_count + 2),
            rel::THEME,
            "theme/theme1.xml",
        ));
        self.add("ppt/presentation.xml", presentation_xml(presentation)?.as_bytes())?;
        self.add(
            "ppt/_rels/presentation.xml.rels",
            parts::relationships_xml(&pres_rels)?.as_bytes(),
        )?;

        self.add("ppt/slideMasters/slideMaster1.xml", parts::SLIDE_MASTER.as_bytes())?;
        self.add(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::relationships_xml(&[
                Relationship::new("rId1", rel::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
                Relationship::new("rId2", rel::THEME, "../theme/theme1.xml"),
            ])?
            .as_bytes(),
        )?;
        self.add("ppt/slideLayouts/slideLayout1.xml", parts::SLIDE_LAYOUT_BLANK.as_bytes())?;
        self.add(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::relationships_xml(&[Relationship::new(
                "rId1",
                rel::SLIDE_MASTER,
                "../slideMasters/slideMaster1.xml",
            )])?
            .as_bytes(),
        )?;
        self.add("ppt/theme/theme1.xml", parts::THEME.as_bytes())?;

        for (i, slide) in presentation.slides.iter().enumerate() {
            let n = i + 1;
            let (xml, rels) = slide_xml(slide, &media)?;
            self.add(&format!("ppt/slides/slide{n}.xml"), xml.as_bytes())?;
            self.add(
                &format!("ppt/slides/_rels/slide{n}.xml.rels"),
                parts::relationships_xml(&rels)?.as_bytes(),
            )?;
            log::debug!("Slide {} written with {} shapes", n, slide.shapes.len());
        }

        for (i, path) in media.files.iter().enumerate() {
            let bytes = std::fs::read(path)?;
            self.add(&format!("ppt/media/image{}.png", i + 1), &bytes)?;
        }
        Ok(())
    }

    /// Finish the archive and return the underlying writer
    pub fn finish(self) -> Result<W, DeckError> {
        Ok(self.zip.finish()?)
    }
}

fn presentation_xml(presentation: &Presentation) -> Result<String, DeckError> {
    let mut xml = String::with_capacity(1024 + presentation.slides.len() * 48);
    xml.push_str(parts::XML_HEADER);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        parts::NS_A,
        parts::NS_R,
        parts::NS_P
    )?;
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    if !presentation.slides.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for i in 0..presentation.slides.len() {
            write!(xml, r#"<p:sldId id="{}" r:id="rId{}"/>"#, FIRST_SLIDE_ID + i, i + 2)?;
        }
        xml.push_str("</p:sldIdLst>");
    }
    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        inches(presentation.width),
        inches(presentation.height)
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// Slide XML plus its relationships (layout first, then pictures)
fn slide_xml<'a>(
    slide: &Slide,
    media: &MediaTable,
) -> Result<(String, Vec<Relationship<'a>>), DeckError> {
    let mut rels = vec![Relationship::new(
        "rId1",
        rel::SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml",
    )];
    let mut picture_rels: HashMap<String, String> = HashMap::new();

    let mut xml = String::with_capacity(4096);
    xml.push_str(parts::XML_HEADER);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"><p:cSld>"#,
        parts::NS_A,
        parts::NS_R,
        parts::NS_P
    )?;
    xml.push_str(parts::SP_TREE_OPEN);

    for (i, shape) in slide.shapes.iter().enumerate() {
        // id 1 is the shape tree itself
        let id = i + 2;
        match shape {
            Shape::TextBox {
                frame,
                paragraphs,
                word_wrap,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(xml, r#"<p:cNvPr id="{id}" name="TextBox {id}"/>"#)?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>"#);
                write_xfrm(&mut xml, frame)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);
                let wrap = if *word_wrap { "square" } else { "none" };
                write!(xml, r#"<p:txBody><a:bodyPr wrap="{wrap}" rtlCol="0"/><a:lstStyle/>"#)?;
                write_paragraphs(&mut xml, paragraphs)?;
                xml.push_str("</p:txBody></p:sp>");
            }
            Shape::CodeBlock {
                frame,
                fill,
                paragraphs,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(xml, r#"<p:cNvPr id="{id}" name="Code {id}"/>"#)?;
                xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>");
                write_xfrm(&mut xml, frame)?;
                xml.push_str(r#"<a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom>"#);
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{0}"/></a:solidFill><a:ln><a:solidFill><a:srgbClr val="{0}"/></a:solidFill></a:ln>"#,
                    fill.hex()
                )?;
                xml.push_str(r#"</p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="t"/><a:lstStyle/>"#);
                write_paragraphs(&mut xml, paragraphs)?;
                xml.push_str("</p:txBody></p:sp>");
            }
            Shape::Picture { frame, path } => {
                let Some(media_name) = media.name_of(path) else {
                    continue;
                };
                let rel_id = match picture_rels.get(&media_name) {
                    Some(existing) => existing.clone(),
                    None => {
                        let rel_id = format!("rId{}", rels.len() + 1);
                        rels.push(Relationship::new(
                            rel_id.clone(),
                            rel::IMAGE,
                            format!("../media/{media_name}"),
                        ));
                        picture_rels.insert(media_name, rel_id.clone());
                        rel_id
                    }
                };
                let descr = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                xml.push_str("<p:pic><p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{id}" name="Picture {id}" descr="{}"/>"#,
                    escape_xml(&descr)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>"#);
                write!(
                    xml,
                    r#"<p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>"#
                )?;
                write_xfrm(&mut xml, frame)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#);
            }
        }
    }

    xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    Ok((xml, rels))
}

fn write_xfrm(xml: &mut String, frame: &Frame) -> Result<(), DeckError> {
    write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        inches(frame.x),
        inches(frame.y),
        inches(frame.width),
        inches(frame.height)
    )?;
    Ok(())
}

fn write_paragraphs(xml: &mut String, paragraphs: &[Paragraph]) -> Result<(), DeckError> {
    // A text body needs at least one paragraph
    if paragraphs.is_empty() {
        xml.push_str("<a:p/>");
        return Ok(());
    }
    for p in paragraphs {
        xml.push_str("<a:p>");
        write!(xml, r#"<a:pPr lvl="{}">"#, p.level)?;
        if let Some(before) = p.space_before {
            write!(xml, r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#, hundredths(before))?;
        }
        if let Some(after) = p.space_after {
            write!(xml, r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#, hundredths(after))?;
        }
        xml.push_str("</a:pPr>");

        let mut props = String::with_capacity(160);
        write!(props, r#" lang="en-US" sz="{}""#, hundredths(p.size))?;
        if p.bold {
            props.push_str(r#" b="1""#);
        }
        props.push_str(r#" dirty="0">"#);
        write!(props, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, p.color.hex())?;
        if let Some(font) = &p.font {
            write!(props, r#"<a:latin typeface="{0}"/><a:cs typeface="{0}"/>"#, escape_xml(font))?;
        }

        if p.text.is_empty() {
            write!(xml, "<a:endParaRPr{props}</a:endParaRPr>")?;
        } else {
            write!(xml, "<a:r><a:rPr{props}</a:rPr><a:t>{}</a:t></a:r>", escape_xml(&p.text))?;
        }
        xml.push_str("</a:p>");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Rgb, SlideStyle};
    use crate::deck::BulletBox;
    use std::io::Read;

    fn sample_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::from_pixel(32, 18, image::Rgb([244, 248, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn entry_names(bytes: Vec<u8>) -> Vec<String> {
        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut text = String::new();
        file.read_to_string(&mut text).unwrap();
        text
    }

    fn write_to_memory(presentation: &Presentation) -> Vec<u8> {
        let mut writer = PackageWriter::new(std::io::Cursor::new(Vec::new()));
        writer.write_presentation(presentation, "Test deck").unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_shared_image_stored_once() {
        let dir = tempfile::tempdir().unwrap();
        let cover = sample_png(dir.path(), "cover.png");
        let style = SlideStyle::default();

        let mut presentation = Presentation::new();
        for title in ["Cover", "Closing"] {
            let slide = presentation.add_slide();
            slide.title_block(&style, title, None);
            slide.image(&cover, 5.95, 1.22, 7.15).unwrap();
        }

        let bytes = write_to_memory(&presentation);
        let names = entry_names(bytes.clone());
        let media: Vec<_> = names.iter().filter(|n| n.starts_with("ppt/media/")).collect();
        assert_eq!(media, ["ppt/media/image1.png"]);

        for n in 1..=2 {
            let rels = read_entry(&bytes, &format!("ppt/slides/_rels/slide{n}.xml.rels"));
            assert!(rels.contains("../media/image1.png"));
            let slide = read_entry(&bytes, &format!("ppt/slides/slide{n}.xml"));
            assert!(slide.contains(r#"r:embed="rId2""#));
        }
    }

    #[test]
    fn test_package_parts_present() {
        let style = SlideStyle::default();
        let mut presentation = Presentation::new();
        presentation.add_slide().title_block(&style, "Only slide", Some("Sub"));
        let names = entry_names(write_to_memory(&presentation));

        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
        ] {
            assert!(names.iter().any(|n| n == required), "missing {required}");
        }
    }

    #[test]
    fn test_presentation_xml_lists_slides() {
        let mut presentation = Presentation::new();
        presentation.add_slide();
        presentation.add_slide();
        let xml = presentation_xml(&presentation).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    }

    #[test]
    fn test_slide_text_is_escaped_and_styled() {
        let style = SlideStyle::default();
        let mut slide = Slide::new();
        slide
            .title_block(&style, "Tools -> MCP & rules", None)
            .bullets(&style, [("Don't: use admin tokens", 1u8)], BulletBox::default())
            .code_block(
                &style,
                &["echo '.env' >> .gitignore", ""],
                Frame::new(0.55, 1.9, 12.2, 4.95),
                15.0,
            );
        let (xml, rels) = slide_xml(&slide, &MediaTable::default()).unwrap();

        assert_eq!(rels.len(), 1);
        assert!(xml.contains("Tools -&gt; MCP &amp; rules"));
        assert!(xml.contains(r#"sz="3400" b="1""#));
        assert!(xml.contains(r#"<a:pPr lvl="1">"#));
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="800"/></a:spcAft>"#));
        assert!(xml.contains(r#"prst="roundRect""#));
        assert!(xml.contains(r#"<a:latin typeface="DejaVu Sans Mono"/>"#));
        assert!(xml.contains("<a:endParaRPr"));
        assert!(xml.contains(&Rgb(22, 31, 49).hex()));
    }
}
