use crate::{FormatError, MAX_RESULTS};
use dict_model::Translation;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Alfred script-filter XML.
///
/// Each pair becomes a selectable item: the destination term is title and
/// argument, the source term the subtitle. A miss is a single invalid item.
pub fn render(translation: &Translation) -> Result<String, FormatError> {
    let mut writer = Writer::new(Vec::new());

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;
    write(&mut writer, Event::Start(BytesStart::new("items")))?;

    if !translation.is_found() {
        let mut item = BytesStart::new("item");
        item.push_attribute(("valid", "no"));
        write(&mut writer, Event::Start(item))?;
        write_text_element(
            &mut writer,
            "title",
            &format!("{} not found", translation.query()),
        )?;
        write(&mut writer, Event::End(BytesEnd::new("item")))?;
    } else {
        for (destination, source) in translation.pairs(MAX_RESULTS) {
            let mut item = BytesStart::new("item");
            item.push_attribute(("valid", "yes"));
            item.push_attribute(("arg", destination));
            write(&mut writer, Event::Start(item))?;
            write_text_element(&mut writer, "title", destination)?;
            write_text_element(&mut writer, "subtitle", source)?;
            write(&mut writer, Event::End(BytesEnd::new("item")))?;
        }
    }

    write(&mut writer, Event::End(BytesEnd::new("items")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), FormatError> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), FormatError> {
    writer
        .write_event(event)
        .map_err(|e| FormatError::Xml(Box::new(e)))
}
