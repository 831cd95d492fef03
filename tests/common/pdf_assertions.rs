use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Extract the base font names referenced from page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::HashSet::new();

    for (_page_num, page_id) in doc.get_pages() {
        let Ok(page_dict) = doc.get_dictionary(page_id) else {
            continue;
        };
        let Ok(resources) = page_dict.get(b"Resources") else {
            continue;
        };
        let resources_dict = if let Ok(ref_id) = resources.as_reference() {
            doc.get_dictionary(ref_id).ok()
        } else {
            resources.as_dict().ok()
        };
        let Some(font_dict) = resources_dict.and_then(|r| r.get(b"Font").ok()) else {
            continue;
        };
        let fonts_dict = if let Ok(ref_id) = font_dict.as_reference() {
            doc.get_dictionary(ref_id).ok()
        } else {
            font_dict.as_dict().ok()
        };
        let Some(fonts_dict) = fonts_dict else {
            continue;
        };

        for (_font_name, font_val) in fonts_dict.iter() {
            let font_dict = if let Ok(font_obj_id) = font_val.as_reference() {
                doc.get_dictionary(font_obj_id).ok()
            } else {
                font_val.as_dict().ok()
            };
            if let Some(name) = font_dict
                .and_then(|f| f.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }

    fonts.into_iter().collect()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_dictionary(*page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

/// Read a string entry from the document information dictionary
pub fn info_entry(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    let value = info.get(key).ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(value).to_string())
}
