//! Registry writes and system search locators

tuple_definition! {
    /// A registry value written with the owning component
    Registry => REGISTRY, RegistryTupleFields, RegistryTuple {
        /// Registry root ordinal (HKCR=0, HKCU=1, HKLM=2, HKU=3)
        Root / root / set_root : Number,
        Key / key / set_key : String,
        Name / name / set_name : opt String,
        Value / value / set_value : opt String,
        ComponentRef / component_ref / set_component_ref : String,
    }
}

tuple_definition! {
    RemoveRegistry => REMOVE_REGISTRY, RemoveRegistryTupleFields, RemoveRegistryTuple {
        Root / root / set_root : Number,
        Key / key / set_key : String,
        Name / name / set_name : opt String,
        Action / action / set_action : Number,
        ComponentRef / component_ref / set_component_ref : String,
    }
}

tuple_definition! {
    /// Search the registry for a signature match
    RegLocator => REG_LOCATOR, RegLocatorTupleFields, RegLocatorTuple {
        Root / root / set_root : Number,
        Key / key / set_key : String,
        Name / name / set_name : opt String,
        LocatorType / locator_type / set_locator_type : Number,
        Win64 / win64 / set_win64 : Bool,
    }
}

tuple_definition! {
    /// Search for an installed component by GUID
    CompLocator => COMP_LOCATOR, CompLocatorTupleFields, CompLocatorTuple {
        ComponentId / component_id / set_component_id : String,
        LocatorType / locator_type / set_locator_type : Number,
    }
}

tuple_definition! {
    /// Search an INI file for a signature match
    IniLocator => INI_LOCATOR, IniLocatorTupleFields, IniLocatorTuple {
        FileName / file_name / set_file_name : String,
        Section / section / set_section : String,
        Key / key / set_key : String,
        FieldIndex / field_index / set_field_index : opt Number,
        LocatorType / locator_type / set_locator_type : Number,
    }
}

tuple_definition! {
    /// Search a directory tree, optionally below a parent signature
    DrLocator => DR_LOCATOR, DrLocatorTupleFields, DrLocatorTuple {
        ParentSignatureRef / parent_signature_ref / set_parent_signature_ref : opt String,
        Path / search_path / set_search_path : opt Path,
        Depth / depth / set_depth : opt Number,
    }
}

tuple_definition! {
    /// File signature a locator row matches against
    Signature => SIGNATURE, SignatureTupleFields, SignatureTuple {
        FileName / file_name / set_file_name : String,
        MinVersion / min_version / set_min_version : opt String,
        MaxVersion / max_version / set_max_version : opt String,
        MinSize / min_size / set_min_size : opt Number,
        MaxSize / max_size / set_max_size : opt Number,
        MinDate / min_date / set_min_date : opt Number,
        MaxDate / max_date / set_max_date : opt Number,
        Languages / languages / set_languages : opt String,
    }
}

tuple_definition! {
    /// Bind a search result to the property that receives it
    AppSearch => APP_SEARCH, AppSearchTupleFields, AppSearchTuple {
        PropertyRef / property_ref / set_property_ref : String,
        SignatureRef / signature_ref / set_signature_ref : String,
    }
}

tuple_definition! {
    /// An INI file entry written with the owning component
    IniFile => INI_FILE, IniFileTupleFields, IniFileTuple {
        FileName / file_name / set_file_name : String,
        DirProperty / dir_property / set_dir_property : opt String,
        Section / section / set_section : String,
        Key / key / set_key : String,
        Value / value / set_value : String,
        Action / action / set_action : Number,
        ComponentRef / component_ref / set_component_ref : String,
    }
}
