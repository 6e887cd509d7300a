//! Static page content
//!
//! Everything drawn regardless of the record: the letterhead, titles,
//! prose with its fill-in rules, labels and the genealogy box skeleton.
//! Positions use the same millimetre, top-left, baseline convention as the
//! mapping tables; the fill-in rules line up with the mapped fields.

use crate::mapping::TextStyle;
use coc_record::PageId;
use pdf_core::Align;

/// Stroke width of fill-in rules, in points
pub const RULE_WIDTH: f64 = 0.5;

/// Stroke width of genealogy boxes, in points
pub const BOX_WIDTH: f64 = 0.8;

/// Horizontal center of a US Letter page, in millimetres
pub const PAGE_CENTER_X: f64 = 107.95;

/// One static drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Text {
        text: &'static str,
        x: f64,
        y: f64,
        font_size: f32,
        style: TextStyle,
        align: Align,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Stroke width in points
        width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        /// Stroke width in points
        line_width: f64,
    },
}

impl Element {
    pub const fn bold(self) -> Self {
        self.with_style(TextStyle::Bold)
    }

    pub const fn italic(self) -> Self {
        self.with_style(TextStyle::Italic)
    }

    const fn with_style(self, new_style: TextStyle) -> Self {
        match self {
            Element::Text {
                text,
                x,
                y,
                font_size,
                align,
                ..
            } => Element::Text {
                text,
                x,
                y,
                font_size,
                style: new_style,
                align,
            },
            other => other,
        }
    }

    /// Center text on its `x`
    pub const fn center(self) -> Self {
        match self {
            Element::Text {
                text,
                x,
                y,
                font_size,
                style,
                ..
            } => Element::Text {
                text,
                x,
                y,
                font_size,
                style,
                align: Align::Center,
            },
            other => other,
        }
    }

    /// Override the stroke width of a line or rectangle
    pub const fn stroke(self, points: f64) -> Self {
        match self {
            Element::Line { x1, y1, x2, y2, .. } => Element::Line {
                x1,
                y1,
                x2,
                y2,
                width: points,
            },
            Element::Rect {
                x,
                y,
                width,
                height,
                ..
            } => Element::Rect {
                x,
                y,
                width,
                height,
                line_width: points,
            },
            other => other,
        }
    }
}

const fn text(text: &'static str, x: f64, y: f64, font_size: f32) -> Element {
    Element::Text {
        text,
        x,
        y,
        font_size,
        style: TextStyle::Regular,
        align: Align::Left,
    }
}

/// Text centered on the page
const fn heading(text: &'static str, y: f64, font_size: f32) -> Element {
    Element::Text {
        text,
        x: PAGE_CENTER_X,
        y,
        font_size,
        style: TextStyle::Bold,
        align: Align::Center,
    }
}

/// Horizontal fill-in rule
const fn rule(x1: f64, y: f64, x2: f64) -> Element {
    line(x1, y, x2, y)
}

const fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Element {
    Element::Line {
        x1,
        y1,
        x2,
        y2,
        width: RULE_WIDTH,
    }
}

const fn rect(x: f64, y: f64, width: f64, height: f64) -> Element {
    Element::Rect {
        x,
        y,
        width,
        height,
        line_width: BOX_WIDTH,
    }
}

/// Letterhead lines and rule, drawn on every page
pub const HEADER: &[Element] = &[
    text("Republic of the Philippines", PAGE_CENTER_X, 15.0, 9.0).center(),
    text("Office of the President", PAGE_CENTER_X, 19.5, 9.0).center(),
    heading("NATIONAL COMMISSION ON INDIGENOUS PEOPLES", 25.0, 12.0),
    text(
        "Sarangani Provincial Office, Alabel, Sarangani Province",
        PAGE_CENTER_X,
        30.0,
        9.0,
    )
    .center(),
    rule(20.0, 35.0, 195.9).stroke(1.0),
];

/// Application form
pub const PAGE_1: &[Element] = &[
    heading("APPLICATION FOR CERTIFICATE OF CONFIRMATION", 45.0, 13.0),
    text("I. PERSONAL INFORMATION", 20.0, 55.0, 10.0).bold(),
    text("Full Name:", 20.0, 63.0, 9.0),
    rule(45.0, 64.2, 195.9),
    text("Date of Birth:", 20.0, 71.0, 9.0),
    rule(45.0, 72.2, 100.0),
    text("Place of Birth:", 105.0, 71.0, 9.0),
    rule(130.0, 72.2, 195.9),
    text("Age:", 20.0, 79.0, 9.0),
    rule(45.0, 80.2, 60.0),
    text("Sex:", 65.0, 79.0, 9.0),
    rule(74.0, 80.2, 100.0),
    text("Civil Status:", 105.0, 79.0, 9.0),
    rule(130.0, 80.2, 195.9),
    text("Religion:", 20.0, 87.0, 9.0),
    rule(45.0, 88.2, 100.0),
    text("Tribe/ICC:", 105.0, 87.0, 9.0),
    rule(130.0, 88.2, 195.9),
    text("Place of Origin:", 20.0, 95.0, 9.0),
    rule(45.0, 96.2, 100.0),
    text("Contact No.:", 105.0, 95.0, 9.0),
    rule(130.0, 96.2, 195.9),
    text("Barangay:", 20.0, 103.0, 9.0),
    rule(45.0, 104.2, 100.0),
    text("City/Municipality:", 105.0, 103.0, 9.0),
    rule(131.0, 104.2, 195.9),
    text("Province:", 20.0, 111.0, 9.0),
    rule(45.0, 112.2, 100.0),
    text("Address:", 20.0, 119.0, 9.0),
    rule(45.0, 120.2, 195.9),
    text("II. EDUCATIONAL BACKGROUND", 20.0, 131.0, 10.0).bold(),
    text("Highest Attainment:", 20.0, 139.0, 9.0),
    rule(50.0, 140.2, 110.0),
    text("Degree/Course:", 113.0, 139.0, 9.0),
    rule(137.0, 140.2, 195.9),
    text("III. PURPOSE OF APPLICATION", 20.0, 151.0, 10.0).bold(),
    rule(20.0, 160.2, 195.9),
    text("IV. LAND MATTER (if applicable)", 20.0, 171.0, 10.0).bold(),
    text("Homestead No.:", 20.0, 179.0, 9.0),
    rule(45.0, 180.2, 100.0),
    text("Lot No.:", 105.0, 179.0, 9.0),
    rule(125.0, 180.2, 195.9),
    text("Date Issued:", 20.0, 187.0, 9.0),
    rule(45.0, 188.2, 100.0),
    text("Area:", 105.0, 187.0, 9.0),
    rule(125.0, 188.2, 195.9),
    text("Location:", 20.0, 195.0, 9.0),
    rule(45.0, 196.2, 195.9),
    text("V. APPLICATION DETAILS", 20.0, 207.0, 10.0).bold(),
    text("Date of Application:", 20.0, 215.0, 9.0),
    rule(50.0, 216.2, 100.0),
    text("Application No.:", 105.0, 215.0, 9.0),
    rule(129.0, 216.2, 195.9),
    text("Status:", 20.0, 223.0, 9.0),
    rule(50.0, 224.2, 100.0),
    text(
        "I hereby certify that the foregoing information is true and correct to the best of",
        20.0,
        236.0,
        9.0,
    ),
    text("my knowledge and belief.", 20.0, 240.5, 9.0),
    rule(115.0, 259.5, 185.0),
    text("Signature over Printed Name of Applicant", 150.0, 264.0, 8.0).center(),
];

/// Barangay certification
pub const PAGE_2: &[Element] = &[
    heading("OFFICE OF THE PUNONG BARANGAY", 45.0, 11.0),
    heading("BARANGAY CERTIFICATION", 58.0, 14.0),
    text("TO WHOM IT MAY CONCERN:", 20.0, 72.0, 11.0).bold(),
    text("This is to certify that ", 30.0, 86.0, 11.0),
    text(",", 140.6, 86.0, 11.0),
    text(" years of age, ", 34.0, 95.0, 11.0),
    text(", a member of the ", 88.6, 95.0, 11.0),
    text("Indigenous Cultural Community, and a bona fide resident of", 20.0, 104.0, 11.0),
    text(".", 194.8, 113.0, 11.0),
    text("This further certifies that the above-named person resides in Barangay", 30.0, 122.0, 11.0),
    text(", Municipality of ", 75.0, 131.0, 11.0),
    text(".", 194.8, 131.0, 11.0),
    text("This certification is issued upon the request of the above-named person for", 30.0, 140.0, 11.0),
    text(" purposes.", 177.8, 149.0, 11.0),
    text("Issued this ", 30.0, 158.0, 11.0),
    text(" day of ", 63.6, 158.0, 11.0),
    text(", ", 111.4, 158.0, 11.0),
    text(".", 131.5, 158.0, 11.0),
    rule(65.6, 87.2, 140.6),
    rule(20.0, 96.2, 34.0),
    rule(58.6, 96.2, 88.6),
    rule(120.1, 96.2, 195.9),
    rule(20.0, 114.2, 194.8),
    rule(20.0, 132.2, 75.0),
    rule(102.8, 132.2, 194.8),
    rule(20.0, 150.2, 177.8),
    rule(49.6, 159.2, 63.6),
    rule(76.4, 159.2, 111.4),
    rule(113.5, 159.2, 131.5),
    rule(115.0, 201.5, 185.0),
    text("Punong Barangay", 150.0, 206.5, 10.0).center(),
    text("Not valid without the official dry seal.", 20.0, 250.0, 8.0).italic(),
];

/// Certification of tribal membership
pub const PAGE_3: &[Element] = &[
    heading("OFFICE OF THE TRIBAL COUNCIL OF ELDERS", 45.0, 11.0),
    heading("CERTIFICATION OF TRIBAL MEMBERSHIP", 58.0, 14.0),
    text("TO WHOM IT MAY CONCERN:", 20.0, 72.0, 11.0).bold(),
    text("This is to certify that ", 30.0, 86.0, 11.0),
    text(",", 140.6, 86.0, 11.0),
    text("is a bona fide member of the ", 20.0, 95.0, 11.0),
    text(" and ", 115.3, 95.0, 11.0),
    text("Indigenous Cultural Communities/Indigenous Peoples, presently residing at", 20.0, 104.0, 11.0),
    text(".", 194.8, 113.0, 11.0),
    text("This further certifies that the above-named person is recognized by the", 30.0, 122.0, 11.0),
    text("elders and leaders of the community as belonging to the said ICCs/IPs by", 20.0, 131.0, 11.0),
    text("blood, descent and cultural affiliation.", 20.0, 140.0, 11.0),
    text("This certification is issued for ", 30.0, 149.0, 11.0),
    text(" purposes.", 177.8, 149.0, 11.0),
    text("Issued this ", 30.0, 158.0, 11.0),
    text(" day of ", 63.6, 158.0, 11.0),
    text(", ", 111.4, 158.0, 11.0),
    text(" at", 131.5, 158.0, 11.0),
    text(".", 110.0, 167.0, 11.0),
    rule(65.6, 87.2, 140.6),
    rule(70.3, 96.2, 115.3),
    rule(123.9, 96.2, 195.9),
    rule(20.0, 114.2, 194.8),
    rule(80.9, 150.2, 177.8),
    rule(49.6, 159.2, 63.6),
    rule(76.4, 159.2, 111.4),
    rule(113.5, 159.2, 131.5),
    rule(20.0, 168.2, 110.0),
    rule(115.0, 201.5, 185.0),
    text("Tribal Chieftain / Council of Elders", 150.0, 206.5, 10.0).center(),
    text("Attested by:", 20.0, 222.0, 10.0),
    rule(20.0, 237.5, 90.0),
    text("NCIP Community Service Center", 55.0, 242.5, 9.0).center(),
];

/// Joint affidavit of two disinterested persons
pub const PAGE_4: &[Element] = &[
    heading("JOINT AFFIDAVIT OF TWO DISINTERESTED PERSONS", 45.0, 13.0),
    text("REPUBLIC OF THE PHILIPPINES", 20.0, 55.0, 10.0),
    text(")", 85.0, 55.0, 10.0),
    text("PROVINCE OF SARANGANI", 20.0, 60.0, 10.0),
    text(") S.S.", 85.0, 60.0, 10.0),
    text("We, ", 30.0, 72.0, 10.5),
    text(", ", 99.6, 72.0, 10.5),
    text(" years of age, residing at", 113.7, 72.0, 10.5),
    text(", and ", 120.0, 80.0, 10.5),
    text(",", 194.9, 80.0, 10.5),
    text(" years of age, residing at ", 32.0, 88.0, 10.5),
    text(",", 194.9, 88.0, 10.5),
    text("after having been duly sworn in accordance with law, depose and say:", 20.0, 96.0, 10.5),
    text("1. That we personally know ", 30.0, 104.0, 10.5),
    text(", ", 137.9, 104.0, 10.5),
    text(" years old,", 152.0, 104.0, 10.5),
    text("a member of the ", 20.0, 112.0, 10.5),
    text(" tribe, residing at ", 88.0, 112.0, 10.5),
    text(";", 194.9, 112.0, 10.5),
    text("2. That he/she was born on ", 30.0, 120.0, 10.5),
    text(" at ", 107.9, 120.0, 10.5),
    text(";", 194.9, 120.0, 10.5),
    text("3. That his/her father is ", 30.0, 128.0, 10.5),
    text(" and mother is", 130.9, 128.0, 10.5),
    text(", both members of the said community;", 82.0, 136.0, 10.5),
    text("4. That we execute this affidavit to attest to the truth of the foregoing", 30.0, 144.0, 10.5),
    text("facts and for whatever legal purpose it may serve.", 20.0, 152.0, 10.5),
    text("IN WITNESS WHEREOF, we have set our hands this ", 30.0, 160.0, 10.5),
    text(" day of", 132.7, 160.0, 10.5),
    text(", ", 55.0, 168.0, 10.5),
    text(" at ", 75.1, 168.0, 10.5),
    text(".", 194.9, 168.0, 10.5),
    rule(37.6, 73.2, 99.6),
    rule(101.7, 73.2, 113.7),
    rule(20.0, 81.2, 120.0),
    rule(129.3, 81.2, 194.9),
    rule(20.0, 89.2, 32.0),
    rule(73.6, 89.2, 194.9),
    rule(75.9, 105.2, 137.9),
    rule(140.0, 105.2, 152.0),
    rule(48.0, 113.2, 88.0),
    rule(116.4, 113.2, 194.9),
    rule(75.9, 121.2, 107.9),
    rule(113.1, 121.2, 194.9),
    rule(68.9, 129.2, 130.9),
    rule(20.0, 137.2, 82.0),
    rule(118.7, 161.2, 132.7),
    rule(20.0, 169.2, 55.0),
    rule(57.1, 169.2, 75.1),
    rule(80.2, 169.2, 194.9),
    rule(28.0, 191.5, 96.0),
    text("Affiant", 62.0, 196.5, 10.0).center(),
    rule(120.0, 191.5, 188.0),
    text("Affiant", 154.0, 196.5, 10.0).center(),
    text(
        "SUBSCRIBED AND SWORN to before me this _____ day of _______________, ______,",
        30.0,
        212.0,
        10.0,
    ),
    text(
        "at Alabel, Sarangani Province, affiants exhibiting their valid identification cards.",
        20.0,
        217.5,
        10.0,
    ),
    rule(115.0, 240.0, 185.0),
    text("Administering Officer", 150.0, 245.0, 10.0).center(),
    text("Doc. No. ______;", 20.0, 255.0, 9.0),
    text("Page No. ______;", 20.0, 259.5, 9.0),
    text("Book No. ______;", 20.0, 264.0, 9.0),
    text("Series of ______.", 20.0, 268.5, 9.0),
];

/// Genealogical tree
pub const PAGE_5: &[Element] = &[
    heading("GENEALOGICAL TREE", 45.0, 14.0),
    text("(Three Generations)", PAGE_CENTER_X, 51.0, 10.0).center(),
    // Grandparents
    rect(20.0, 62.0, 42.0, 25.0),
    text("Paternal Grandfather", 41.0, 66.5, 7.5).bold().center(),
    rect(64.6, 62.0, 42.0, 25.0),
    text("Paternal Grandmother", 85.6, 66.5, 7.5).bold().center(),
    rect(109.3, 62.0, 42.0, 25.0),
    text("Maternal Grandfather", 130.3, 66.5, 7.5).bold().center(),
    rect(153.9, 62.0, 42.0, 25.0),
    text("Maternal Grandmother", 174.9, 66.5, 7.5).bold().center(),
    line(41.0, 87.0, 41.0, 97.0),
    line(85.6, 87.0, 85.6, 97.0),
    line(41.0, 97.0, 85.6, 97.0),
    line(63.3, 97.0, 63.3, 107.0),
    line(130.3, 87.0, 130.3, 97.0),
    line(174.9, 87.0, 174.9, 97.0),
    line(130.3, 97.0, 174.9, 97.0),
    line(152.6, 97.0, 152.6, 107.0),
    // Parents
    rect(38.3, 107.0, 50.0, 25.0),
    text("Father", 63.3, 111.5, 8.0).bold().center(),
    rect(127.6, 107.0, 50.0, 25.0),
    text("Mother", 152.6, 111.5, 8.0).bold().center(),
    line(63.3, 132.0, 63.3, 142.0),
    line(152.6, 132.0, 152.6, 142.0),
    line(63.3, 142.0, 152.6, 142.0),
    line(PAGE_CENTER_X, 142.0, PAGE_CENTER_X, 152.0),
    // Applicant
    rect(77.95, 152.0, 60.0, 25.0),
    text("Applicant", PAGE_CENTER_X, 156.5, 8.0).bold().center(),
    text(
        "Each box shows the name, tribe (ICC/IP) and address of the person.",
        20.0,
        185.0,
        7.5,
    )
    .italic(),
    text(
        "I hereby certify that the above genealogical information is true and correct and was",
        20.0,
        195.0,
        9.0,
    ),
    text(
        "supplied from my personal knowledge and the records of my family.",
        20.0,
        199.5,
        9.0,
    ),
    rule(115.0, 215.0, 185.0),
    text("Signature of Applicant", 150.0, 220.0, 9.0).center(),
];

/// Static content of a page (the letterhead is separate, see [`HEADER`])
pub fn page_elements(page: PageId) -> &'static [Element] {
    match page {
        PageId::Page1 => PAGE_1,
        PageId::Page2 => PAGE_2,
        PageId::Page3 => PAGE_3,
        PageId::Page4 => PAGE_4,
        PageId::Page5 => PAGE_5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_content() {
        for page in PageId::ALL {
            assert!(!page_elements(page).is_empty(), "{page}");
        }
    }

    #[test]
    fn test_builders() {
        let el = text("A", 1.0, 2.0, 9.0).bold().center();
        assert_eq!(
            el,
            Element::Text {
                text: "A",
                x: 1.0,
                y: 2.0,
                font_size: 9.0,
                style: TextStyle::Bold,
                align: Align::Center,
            }
        );
        assert_eq!(
            rule(1.0, 5.0, 9.0).stroke(2.0),
            Element::Line {
                x1: 1.0,
                y1: 5.0,
                x2: 9.0,
                y2: 5.0,
                width: 2.0
            }
        );
        assert_eq!(rect(0.0, 0.0, 1.0, 1.0).bold(), rect(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_genealogy_has_seven_boxes() {
        let boxes = PAGE_5
            .iter()
            .filter(|el| matches!(el, Element::Rect { .. }))
            .count();
        assert_eq!(boxes, 7);
    }

    #[test]
    fn test_static_text_stays_inside_margins() {
        let pages = PageId::ALL.iter().flat_map(|p| page_elements(*p).iter());
        for el in HEADER.iter().chain(pages) {
            match *el {
                Element::Text { x, y, .. } => {
                    assert!((0.0..=215.9).contains(&x), "{el:?}");
                    assert!((0.0..=279.4).contains(&y), "{el:?}");
                }
                Element::Line { x1, x2, .. } => {
                    assert!(x1 >= 20.0 && x2 <= 195.9, "{el:?}");
                }
                Element::Rect { x, width, .. } => {
                    assert!(x >= 20.0 && x + width <= 195.95, "{el:?}");
                }
            }
        }
    }
}
