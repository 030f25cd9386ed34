//! COM registration, file associations, and advertised resources

tuple_definition! {
    /// A COM class registered or advertised by a component
    Class => CLASS, ClassTupleFields, ClassTuple {
        ClsId / cls_id / set_cls_id : String,
        Context / context / set_context : String,
        ComponentRef / component_ref / set_component_ref : String,
        ProgIdRef / prog_id_ref / set_prog_id_ref : opt String,
        Description / description / set_description : opt String,
        AppIdRef / app_id_ref / set_app_id_ref : opt String,
        FileTypeMask / file_type_mask / set_file_type_mask : opt String,
        IconRef / icon_ref / set_icon_ref : opt String,
        IconIndex / icon_index / set_icon_index : opt Number,
        DefInprocHandler / def_inproc_handler / set_def_inproc_handler : opt String,
        Argument / argument / set_argument : opt String,
        FeatureRef / feature_ref / set_feature_ref : String,
        RelativePath / relative_path / set_relative_path : Bool,
    }
}

tuple_definition! {
    /// Programmatic identifier, optionally versioned under a parent
    ProgId => PROG_ID, ProgIdTupleFields, ProgIdTuple {
        ProgId / prog_id / set_prog_id : String,
        ParentProgIdRef / parent_prog_id_ref / set_parent_prog_id_ref : opt String,
        ClassRef / class_ref / set_class_ref : opt String,
        Description / description / set_description : opt String,
        IconRef / icon_ref / set_icon_ref : opt String,
        IconIndex / icon_index / set_icon_index : opt Number,
    }
}

tuple_definition! {
    /// File-extension association owned by a component
    Extension => EXTENSION, ExtensionTupleFields, ExtensionTuple {
        /// Extension without the leading dot
        Extension / extension / set_extension : String,
        ComponentRef / component_ref / set_component_ref : String,
        ProgIdRef / prog_id_ref / set_prog_id_ref : opt String,
        MimeRef / mime_ref / set_mime_ref : opt String,
        FeatureRef / feature_ref / set_feature_ref : String,
    }
}

tuple_definition! {
    /// A verb (open, print, ...) on a file-extension association
    Verb => VERB, VerbTupleFields, VerbTuple {
        ExtensionRef / extension_ref / set_extension_ref : String,
        Verb / verb / set_verb : String,
        Sequence / sequence / set_sequence : opt Number,
        Command / command / set_command : opt String,
        Argument / argument / set_argument : opt String,
    }
}

tuple_definition! {
    Mime => MIME, MimeTupleFields, MimeTuple {
        ContentType / content_type / set_content_type : String,
        ExtensionRef / extension_ref / set_extension_ref : String,
        ClassRef / class_ref / set_class_ref : opt String,
    }
}

tuple_definition! {
    /// Type library registered with the owning component
    TypeLib => TYPE_LIB, TypeLibTupleFields, TypeLibTuple {
        LibId / lib_id / set_lib_id : String,
        Language / language / set_language : Number,
        ComponentRef / component_ref / set_component_ref : String,
        Version / version / set_version : opt Number,
        Description / description / set_description : opt String,
        DirectoryRef / directory_ref / set_directory_ref : opt String,
        FeatureRef / feature_ref / set_feature_ref : String,
        Cost / cost / set_cost : opt Number,
    }
}

tuple_definition! {
    /// DCOM application identity
    AppId => APP_ID, AppIdTupleFields, AppIdTuple {
        AppId / app_id / set_app_id : String,
        RemoteServerName / remote_server_name / set_remote_server_name : opt String,
        LocalService / local_service / set_local_service : opt String,
        ServiceParameters / service_parameters / set_service_parameters : opt String,
        DllSurrogate / dll_surrogate / set_dll_surrogate : opt String,
        ActivateAtStorage / activate_at_storage / set_activate_at_storage : opt Bool,
        RunAsInteractiveUser / run_as_interactive_user / set_run_as_interactive_user : opt Bool,
    }
}

tuple_definition! {
    /// .NET or Win32 assembly metadata for a component
    Assembly => ASSEMBLY, AssemblyTupleFields, AssemblyTuple {
        ComponentRef / component_ref / set_component_ref : String,
        FeatureRef / feature_ref / set_feature_ref : opt String,
        ManifestFileRef / manifest_file_ref / set_manifest_file_ref : opt String,
        ApplicationFileRef / application_file_ref / set_application_file_ref : opt String,
        /// 0 = .NET, 1 = Win32 side-by-side
        Type / assembly_type / set_assembly_type : Number,
        ProcessorArchitecture / processor_architecture / set_processor_architecture : opt String,
    }
}

tuple_definition! {
    /// Register a file as an installed font
    Font => FONT, FontTupleFields, FontTuple {
        FileRef / file_ref / set_file_ref : String,
        /// Omitted for TrueType fonts; title is read from the file
        FontTitle / font_title / set_font_title : opt String,
    }
}
