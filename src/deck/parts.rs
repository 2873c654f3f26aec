//! Fixed package parts and the XML builders for package-level files

use std::fmt::Write as _;

use super::DeckError;

pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Relationship types
pub mod rel {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}

/// Content types
pub mod ct {
    pub const RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const PNG: &str = "image/png";
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// A relationship entry: id, type and target
pub struct Relationship<'a> {
    pub id: String,
    pub kind: &'a str,
    pub target: String,
}

impl<'a> Relationship<'a> {
    pub fn new(id: impl Into<String>, kind: &'a str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            target: target.into(),
        }
    }
}

/// Serialize a relationships part
pub fn relationships_xml(rels: &[Relationship<'_>]) -> Result<String, DeckError> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_HEADER);
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    for rel in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id,
            rel.kind,
            escape_xml(&rel.target)
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// `[Content_Types].xml` with overrides for every part name given
pub fn content_types_xml(overrides: &[(String, &str)]) -> Result<String, DeckError> {
    let mut xml = String::with_capacity(1024 + overrides.len() * 160);
    xml.push_str(XML_HEADER);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    write!(xml, r#"<Default Extension="rels" ContentType="{}"/>"#, ct::RELS)?;
    write!(xml, r#"<Default Extension="xml" ContentType="{}"/>"#, ct::XML)?;
    write!(xml, r#"<Default Extension="png" ContentType="{}"/>"#, ct::PNG)?;
    for (part_name, content_type) in overrides {
        write!(
            xml,
            r#"<Override PartName="{}" ContentType="{}"/>"#,
            escape_xml(part_name),
            content_type
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

/// Core document properties with the creation timestamp
pub fn core_properties_xml(
    title: &str,
    created: &chrono::DateTime<chrono::Utc>,
) -> Result<String, DeckError> {
    let stamp = created.format("%Y-%m-%dT%H:%M:%SZ");
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_HEADER);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    xml.push_str("<dc:creator>deckdraw</dc:creator>");
    write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>"#
    )?;
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Shape tree opening shared by master, layout and slides
pub const SP_TREE_OPEN: &str = concat!(
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
);

pub const SLIDE_MASTER: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld>"#,
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
    r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    r#"</p:sldMaster>"#
);

pub const SLIDE_LAYOUT_BLANK: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1">"#,
    r#"<p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld>"#,
    r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#
);

pub const THEME: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Deck Theme"><a:themeElements>"#,
    r#"<a:clrScheme name="Deck">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="14284A"/></a:dk2><a:lt2><a:srgbClr val="F4F8FF"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="1A5CA8"/></a:accent1><a:accent2><a:srgbClr val="1A748E"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="42A261"/></a:accent3><a:accent4><a:srgbClr val="535AB4"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="D6A668"/></a:accent5><a:accent6><a:srgbClr val="914040"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#,
    r#"</a:clrScheme>"#,
    r#"<a:fontScheme name="Deck">"#,
    r#"<a:majorFont><a:latin typeface="DejaVu Sans"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="DejaVu Sans"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    r#"</a:fontScheme>"#,
    r#"<a:fmtScheme name="Deck"><a:fillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"</a:fillStyleLst><a:lnStyleLst>"#,
    r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"</a:lnStyleLst><a:effectStyleLst>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"</a:effectStyleLst><a:bgFillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"</a:bgFillStyleLst></a:fmtScheme>"#,
    r#"</a:themeElements></a:theme>"#
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Tools -> MCP & <rules>"), "Tools -&gt; MCP &amp; &lt;rules&gt;");
        assert_eq!(escape_xml(r#"Don't "merge""#), "Don&apos;t &quot;merge&quot;");
    }

    #[test]
    fn test_relationships_xml() {
        let rels = [
            Relationship::new("rId1", rel::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
            Relationship::new("rId2", rel::IMAGE, "../media/image1.png"),
        ];
        let xml = relationships_xml(&rels).unwrap();
        assert!(xml.starts_with(XML_HEADER));
        assert!(xml.contains(r#"Id="rId2""#));
        assert!(xml.contains("../media/image1.png"));
        assert_eq!(xml.matches("<Relationship ").count(), 2);
    }

    #[test]
    fn test_content_types_overrides() {
        let xml = content_types_xml(&[("/ppt/slides/slide1.xml".to_string(), ct::SLIDE)]).unwrap();
        assert!(xml.contains(r#"Extension="png""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
    }

    #[test]
    fn test_static_parts_share_shape_tree() {
        assert!(SLIDE_MASTER.contains(SP_TREE_OPEN));
        assert!(SLIDE_LAYOUT_BLANK.contains(SP_TREE_OPEN));
        assert!(SLIDE_LAYOUT_BLANK.contains(r#"type="blank""#));
    }

    #[test]
    fn test_core_properties_date() {
        use chrono::TimeZone;
        let created = chrono::Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let xml = core_properties_xml("Deck & notes", &created).unwrap();
        assert!(xml.contains("2026-03-04T05:06:07Z"));
        assert!(xml.contains("Deck &amp; notes"));
    }
}
